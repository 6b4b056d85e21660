//! CSV export of yearly projection rows

use serde::Serialize;
use std::io::Write;

use super::results::ProjectionYear;
use crate::error::Result;

/// Flat CSV record; per-asset values are left out
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    year: u32,
    age: u32,
    total_amount: f64,
    total_invested: f64,
    yearly_investment: f64,
    yearly_return: f64,
    inflation_adjusted_value: f64,
}

impl From<&ProjectionYear> for CsvRow {
    fn from(row: &ProjectionYear) -> Self {
        Self {
            year: row.year,
            age: row.age,
            total_amount: row.total_amount,
            total_invested: row.total_invested,
            yearly_investment: row.yearly_investment,
            yearly_return: row.yearly_return,
            inflation_adjusted_value: row.inflation_adjusted_value,
        }
    }
}

/// Write projection rows with a header line
pub fn write_projection_csv<W: Write>(writer: W, rows: &[ProjectionYear]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(CsvRow::from(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}
