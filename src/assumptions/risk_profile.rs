//! Investor risk profiles and their expected annual return bands

use serde::{Deserialize, Serialize};

/// Annual return band in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnBand {
    pub low: f64,
    pub high: f64,
}

impl ReturnBand {
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Risk appetite used to derive a return when no manual rate is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskProfile {
    pub const fn return_band(self) -> ReturnBand {
        match self {
            RiskProfile::Conservative => ReturnBand { low: 6.0, high: 8.0 },
            RiskProfile::Moderate => ReturnBand { low: 10.0, high: 12.0 },
            RiskProfile::Aggressive => ReturnBand { low: 14.0, high: 16.0 },
        }
    }

    /// Effective annual return in percent.
    /// A manual rate wins only when strictly positive; zero or negative means "derive".
    pub fn effective_return(self, manual_rate: f64) -> f64 {
        if manual_rate > 0.0 {
            manual_rate
        } else {
            self.return_band().midpoint()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_midpoints() {
        assert_eq!(RiskProfile::Conservative.return_band().midpoint(), 7.0);
        assert_eq!(RiskProfile::Moderate.return_band().midpoint(), 11.0);
        assert_eq!(RiskProfile::Aggressive.return_band().midpoint(), 15.0);
    }

    #[test]
    fn test_manual_rate_overrides_only_when_positive() {
        assert_eq!(RiskProfile::Moderate.effective_return(9.5), 9.5);
        assert_eq!(RiskProfile::Moderate.effective_return(0.0), 11.0);
        assert_eq!(RiskProfile::Aggressive.effective_return(-2.0), 15.0);
    }
}
