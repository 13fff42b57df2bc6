//! CSV format handling for journal rows
//!
//! This module centralizes the journal's CSV input format concerns,
//! providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//!
//! All functions are pure (no I/O) for easy testing. Report output
//! serialization lives in the `report_writer` module.

use crate::types::{AccountLine, LedgerError, Nature, Side};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the journal input format with columns:
/// entry, date, description, account, amount, side, nature
///
/// Consecutive rows sharing an `entry` value form one journal entry; the
/// date and description are taken from the group's first row. All fields
/// except the entry number stay as strings here so conversion failures
/// produce precise errors instead of opaque serde ones.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub entry: u32,
    pub date: String,
    pub description: String,
    pub account: String,
    pub amount: String,
    pub side: String,
    pub nature: String,
}

/// One parsed journal row: an account line plus its entry context
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub entry: u32,
    pub date: NaiveDate,
    pub description: String,
    pub line: AccountLine,
}

/// Convert a CsvRecord to a LineRecord
///
/// This function:
/// - Parses the date string as an ISO `YYYY-MM-DD` calendar date
/// - Parses the amount string into a Decimal
/// - Parses the side and nature vocabulary (accepting both the English
///   and the original Spanish spellings, case insensitive)
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(LineRecord) - Successfully converted row
/// - Err(LedgerError) - The first conversion failure encountered
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LineRecord, LedgerError> {
    let date = NaiveDate::parse_from_str(csv_record.date.trim(), "%Y-%m-%d")
        .map_err(|_| LedgerError::invalid_date(&csv_record.date))?;

    let amount = Decimal::from_str(csv_record.amount.trim())
        .map_err(|_| LedgerError::invalid_amount(&csv_record.amount))?;

    let side = parse_side(&csv_record.side)?;
    let nature = parse_nature(&csv_record.nature)?;

    Ok(LineRecord {
        entry: csv_record.entry,
        date,
        description: csv_record.description,
        line: AccountLine {
            account: csv_record.account,
            amount,
            side,
            nature,
        },
    })
}

/// Parse a Debit/Credit tag, accepting English and Spanish spellings
fn parse_side(value: &str) -> Result<Side, LedgerError> {
    match value.trim().to_lowercase().as_str() {
        "debit" | "debe" => Ok(Side::Debit),
        "credit" | "haber" => Ok(Side::Credit),
        _ => Err(LedgerError::invalid_side(value)),
    }
}

/// Parse a nature tag, accepting English and Spanish spellings
fn parse_nature(value: &str) -> Result<Nature, LedgerError> {
    match value.trim().to_lowercase().as_str() {
        "asset" | "activo" => Ok(Nature::Asset),
        "liability" | "pasivo" => Ok(Nature::Liability),
        "equity" | "patrimonio" => Ok(Nature::Equity),
        "income" | "ingreso" => Ok(Nature::Income),
        "expense" | "gasto" => Ok(Nature::Expense),
        "sales" | "ventas" => Ok(Nature::Sales),
        "cost_of_sales" | "cost of sales" | "costo de venta" | "costo de ventas" => {
            Ok(Nature::CostOfSales)
        }
        _ => Err(LedgerError::invalid_nature(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(date: &str, amount: &str, side: &str, nature: &str) -> CsvRecord {
        CsvRecord {
            entry: 1,
            date: date.to_string(),
            description: "Venta al contado".to_string(),
            account: "Caja".to_string(),
            amount: amount.to_string(),
            side: side.to_string(),
            nature: nature.to_string(),
        }
    }

    #[test]
    fn test_convert_valid_record() {
        let result = convert_csv_record(record("2024-03-01", "1000.00", "debit", "asset"));
        assert!(result.is_ok());

        let parsed = result.unwrap();
        assert_eq!(parsed.entry, 1);
        assert_eq!(
            parsed.date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(parsed.description, "Venta al contado");
        assert_eq!(parsed.line.account, "Caja");
        assert_eq!(parsed.line.amount, Decimal::new(100000, 2));
        assert_eq!(parsed.line.side, Side::Debit);
        assert_eq!(parsed.line.nature, Nature::Asset);
    }

    #[rstest]
    #[case("debit", Side::Debit)]
    #[case("credit", Side::Credit)]
    #[case("Debe", Side::Debit)] // Spanish, case insensitive
    #[case("HABER", Side::Credit)]
    #[case("  debit  ", Side::Debit)] // whitespace trimming
    fn test_parse_side_vocabulary(#[case] value: &str, #[case] expected: Side) {
        assert_eq!(parse_side(value).unwrap(), expected);
    }

    #[rstest]
    #[case("asset", Nature::Asset)]
    #[case("activo", Nature::Asset)]
    #[case("liability", Nature::Liability)]
    #[case("Pasivo", Nature::Liability)]
    #[case("equity", Nature::Equity)]
    #[case("patrimonio", Nature::Equity)]
    #[case("income", Nature::Income)]
    #[case("ingreso", Nature::Income)]
    #[case("expense", Nature::Expense)]
    #[case("gasto", Nature::Expense)]
    #[case("sales", Nature::Sales)]
    #[case("ventas", Nature::Sales)]
    #[case("cost_of_sales", Nature::CostOfSales)]
    #[case("costo de ventas", Nature::CostOfSales)]
    fn test_parse_nature_vocabulary(#[case] value: &str, #[case] expected: Nature) {
        assert_eq!(parse_nature(value).unwrap(), expected);
    }

    #[rstest]
    #[case::bad_date("2024-13-01", "100", "debit", "asset")]
    #[case::not_a_date("yesterday", "100", "debit", "asset")]
    #[case::bad_amount("2024-03-01", "mil", "debit", "asset")]
    #[case::bad_side("2024-03-01", "100", "izquierda", "asset")]
    #[case::bad_nature("2024-03-01", "100", "debit", "misterio")]
    fn test_convert_errors(
        #[case] date: &str,
        #[case] amount: &str,
        #[case] side: &str,
        #[case] nature: &str,
    ) {
        assert!(convert_csv_record(record(date, amount, side, nature)).is_err());
    }

    #[rstest]
    #[case("2024-13-01", LedgerError::invalid_date("2024-13-01"))]
    #[case("2023-02-29", LedgerError::invalid_date("2023-02-29"))] // not a leap year
    fn test_invalid_dates_are_typed(#[case] date: &str, #[case] expected: LedgerError) {
        let result = convert_csv_record(record(date, "100", "debit", "asset"));
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    #[case("  100.50  ", Decimal::new(10050, 2))] // whitespace trimming
    #[case("0.01", Decimal::new(1, 2))]
    #[case("-5", Decimal::new(-5, 0))] // sign survives parsing; the poster rejects it
    fn test_amount_parsing(#[case] amount: &str, #[case] expected: Decimal) {
        let parsed = convert_csv_record(record("2024-03-01", amount, "debit", "asset")).unwrap();
        assert_eq!(parsed.line.amount, expected);
    }
}
