//! Report output serialization
//!
//! Writes materialized reports as CSV with two-decimal amounts. Output is
//! deterministic: sections and buckets appear in taxonomy order, trial
//! balance rows sorted by account name, ledger rows in (date, sequence)
//! order, exactly as the aggregation engine produces them.

use crate::types::{AccountActivity, BalanceSheet, IncomeStatement, LedgerError, LedgerRow, Side};
use csv::Writer;
use std::io::Write;

/// Write a balance sheet with columns: section, bucket, total
///
/// Every bucket of every section appears, zeros included, each section
/// followed by its `Total` row. The final row reports the year's net
/// result alongside equity.
pub fn write_balance_sheet(
    sheet: &BalanceSheet,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["section", "bucket", "total"])?;

    for section in &sheet.sections {
        let title = section.section.title();
        for bucket in &section.buckets {
            writer.write_record(&[
                title.to_string(),
                bucket.bucket.to_string(),
                format!("{:.2}", bucket.total),
            ])?;
        }
        writer.write_record(&[
            title.to_string(),
            "Total".to_string(),
            format!("{:.2}", section.total),
        ])?;
    }

    writer.write_record(&[
        "Patrimonio".to_string(),
        "Utilidad (Pérdida) neta del año".to_string(),
        format!("{:.2}", sheet.net_result_of_year),
    ])?;

    writer.flush()?;
    Ok(())
}

/// Write an income statement with columns: field, amount
///
/// Rows follow the derived chain from sales down to the net result.
pub fn write_income_statement(
    statement: &IncomeStatement,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["field", "amount"])?;

    let rows = [
        ("sales", statement.sales),
        ("cost_of_sales", statement.cost_of_sales),
        ("gross_margin", statement.gross_margin),
        ("expenses", statement.expenses),
        ("operating_result", statement.operating_result),
        ("other_income", statement.other_income),
        ("result_before_tax", statement.result_before_tax),
        ("tax_provision", statement.tax_provision),
        ("net_result", statement.net_result),
    ];
    for (field, amount) in rows {
        writer.write_record(&[field.to_string(), format!("{:.2}", amount)])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write trial-balance rows with columns: account, opening, debits,
/// credits, closing
pub fn write_trial_balance(
    rows: &[AccountActivity],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["account", "opening", "debits", "credits", "closing"])?;

    for row in rows {
        writer.write_record(&[
            row.account.clone(),
            format!("{:.2}", row.opening),
            format!("{:.2}", row.debits),
            format!("{:.2}", row.credits),
            format!("{:.2}", row.closing),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write ledger rows with columns: account, date, entry, description,
/// debit, credit
///
/// The amount lands in the column matching the line's side; the other
/// column stays empty, as in a printed ledger book.
pub fn write_journal(rows: &[LedgerRow], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(["account", "date", "entry", "description", "debit", "credit"])?;

    for row in rows {
        let amount = format!("{:.2}", row.amount);
        let (debit, credit) = match row.side {
            Side::Debit => (amount, String::new()),
            Side::Credit => (String::new(), amount),
        };
        writer.write_record(&[
            row.account.clone(),
            row.date.to_string(),
            row.sequence.to_string(),
            row.description.clone(),
            debit,
            credit,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
