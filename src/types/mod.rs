//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `entry`: journal entries, account lines, sides and natures
//! - `period`: derived reporting periods
//! - `report`: materialized report results
//! - `error`: error types for the ledger engine

pub mod entry;
pub mod error;
pub mod period;
pub mod report;

pub use entry::{AccountLine, EntryDraft, JournalEntry, Nature, SequenceNumber, Side};
pub use error::LedgerError;
pub use period::ReportingPeriod;
pub use report::{
    AccountActivity, BalanceSheet, BucketTotal, IncomeStatement, LedgerRow, Section, SectionReport,
};
