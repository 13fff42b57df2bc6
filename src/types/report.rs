//! Report output types
//!
//! Fully materialized results of the aggregation engine: the balance sheet,
//! the income statement, per-account trial balance rows, and the
//! chronological ledger listing. Field names are the stable contract the
//! reporting surface renders from.

use crate::types::{SequenceNumber, Side};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Financial-statement section of the balance sheet
///
/// The five sections are fixed; each carries an ordered list of named
/// buckets plus a catch-all (see the classifier's taxonomy tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    CurrentAssets,
    NonCurrentAssets,
    CurrentLiabilities,
    NonCurrentLiabilities,
    Equity,
}

impl Section {
    /// All sections in statement order
    pub const ALL: [Section; 5] = [
        Section::CurrentAssets,
        Section::NonCurrentAssets,
        Section::CurrentLiabilities,
        Section::NonCurrentLiabilities,
        Section::Equity,
    ];

    /// Display title, kept in the original statement's vocabulary
    pub fn title(&self) -> &'static str {
        match self {
            Section::CurrentAssets => "Activo Corriente",
            Section::NonCurrentAssets => "Activo No Corriente",
            Section::CurrentLiabilities => "Pasivo Corriente",
            Section::NonCurrentLiabilities => "Pasivo No Corriente",
            Section::Equity => "Patrimonio",
        }
    }
}

/// Aggregated total for one bucket within a section
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTotal {
    pub bucket: &'static str,
    pub total: Decimal,
}

/// One balance-sheet section: every bucket in taxonomy order plus the
/// section total (the sum over its buckets)
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub section: Section,
    pub buckets: Vec<BucketTotal>,
    pub total: Decimal,
}

/// Balance sheet as of a focal date
///
/// Sections appear in statement order with all buckets present, zeros
/// included. `net_result_of_year` is the income statement's net result for
/// the focal date's calendar year, reported alongside equity.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub as_of: NaiveDate,
    pub sections: Vec<SectionReport>,
    pub net_result_of_year: Decimal,
}

impl BalanceSheet {
    /// The report for one section
    pub fn section(&self, section: Section) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.section == section)
    }
}

/// Income statement for one calendar year
///
/// Sales, cost of sales and other income are credit-normal; expenses are
/// debit-normal. The derived fields run from the gross margin down to the
/// net result after the tax provision.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeStatement {
    pub year: i32,
    pub sales: Decimal,
    pub cost_of_sales: Decimal,
    pub expenses: Decimal,
    pub other_income: Decimal,
    pub gross_margin: Decimal,
    pub operating_result: Decimal,
    pub result_before_tax: Decimal,
    pub tax_provision: Decimal,
    pub net_result: Decimal,
}

/// Trial-balance row for one account over a period
///
/// Opening balance covers lines dated exactly on the period's first day;
/// the movement totals cover the rest of the period.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountActivity {
    pub account: String,
    pub opening: Decimal,
    pub debits: Decimal,
    pub credits: Decimal,
    pub closing: Decimal,
}

/// One row of the chronological ledger listing
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub account: String,
    pub date: NaiveDate,
    pub sequence: SequenceNumber,
    pub description: String,
    pub side: Side,
    pub amount: Decimal,
}
