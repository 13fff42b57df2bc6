//! Error types for the ledger engine
//!
//! This module defines all error types that can occur while loading,
//! posting, or aggregating journal entries. Errors are descriptive enough
//! for a caller to correct its input and retry.
//!
//! # Error Categories
//!
//! - **Input errors**: invalid date, empty description, too few lines,
//!   non-positive amount, unrecognized side or nature - rejected before any
//!   write, nothing persisted.
//! - **Consistency errors**: Debit/Credit totals out of balance - rejected
//!   atomically, no partial entry persisted.
//! - **Not-found errors**: delete or lookup by a sequence with no match -
//!   reported, no state change.
//! - **Storage failures**: the backing store could not commit - rolled back
//!   in full, safe to retry.

use crate::types::SequenceNumber;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// Each variant carries the context needed to diagnose the failure and,
/// for input errors, to correct the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Journal file not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    ///
    /// Typically fatal (permissions, disk full, broken pipe).
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable during journal loading - the affected entry group is
    /// skipped and loading continues with the next one.
    #[error("CSV parse error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Date field could not be parsed as a calendar date
    #[error("Invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The unparseable date string
        value: String,
    },

    /// Side field is neither Debit nor Credit
    #[error("Invalid side '{value}' (expected 'debit' or 'credit')")]
    InvalidSide {
        /// The unrecognized side string
        value: String,
    },

    /// Nature field is not one of the fixed account natures
    #[error("Invalid nature '{value}'")]
    InvalidNature {
        /// The unrecognized nature string
        value: String,
    },

    /// Amount field could not be parsed as a decimal
    #[error("Invalid amount '{value}'")]
    InvalidAmount {
        /// The unparseable amount string
        value: String,
    },

    /// Entry description is empty
    ///
    /// Rejected before anything is written.
    #[error("Entry description must not be empty")]
    EmptyDescription,

    /// Entry has fewer than two lines
    ///
    /// A double-entry posting needs at least one Debit and one Credit line.
    #[error("Entry needs at least 2 lines, got {count}")]
    TooFewLines {
        /// Number of lines supplied
        count: usize,
    },

    /// Line amount is zero or negative
    ///
    /// Direction is carried by the line's side, never by the amount's sign.
    #[error("Amount for account '{account}' must be positive, got {amount}")]
    NonPositiveAmount {
        /// Account name on the offending line
        account: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Debit and Credit totals disagree beyond the 0.01 tolerance
    ///
    /// The whole entry is rejected; nothing is persisted.
    #[error("Entry is unbalanced: debits {debits}, credits {credits}")]
    Unbalanced {
        /// Sum of Debit amounts
        debits: Decimal,
        /// Sum of Credit amounts
        credits: Decimal,
    },

    /// No entry carries the requested sequence number
    #[error("Entry {sequence} not found")]
    EntryNotFound {
        /// The sequence number that was looked up
        sequence: SequenceNumber,
    },

    /// An entry with this sequence number already exists
    ///
    /// Sequence numbers are unique; the insert is rejected unchanged.
    #[error("Entry {sequence} already exists")]
    DuplicateSequence {
        /// The conflicting sequence number
        sequence: SequenceNumber,
    },

    /// The backing store failed to commit
    ///
    /// The partial write has been rolled back in full; the operation can
    /// be retried.
    #[error("Storage failure: {message}")]
    Storage {
        /// Description of the underlying cause
        message: String,
    },

    /// Reporting period runs backwards
    #[error("Invalid period: {start} is after {end}")]
    InvalidPeriod {
        /// Requested period start
        start: NaiveDate,
        /// Requested period end
        end: NaiveDate,
    },

    /// Month selector is out of range
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// Requested year
        year: i32,
        /// Requested month (must be 1-12)
        month: u32,
    },

    /// Trial balance invoked without a period selector
    #[error("Trial balance needs --month or --from/--to")]
    MissingPeriod,
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        LedgerError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create an InvalidSide error
    pub fn invalid_side(value: &str) -> Self {
        LedgerError::InvalidSide {
            value: value.to_string(),
        }
    }

    /// Create an InvalidNature error
    pub fn invalid_nature(value: &str) -> Self {
        LedgerError::InvalidNature {
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(value: &str) -> Self {
        LedgerError::InvalidAmount {
            value: value.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(account: &str, amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount {
            account: account.to_string(),
            amount,
        }
    }

    /// Create an Unbalanced error
    pub fn unbalanced(debits: Decimal, credits: Decimal) -> Self {
        LedgerError::Unbalanced { debits, credits }
    }

    /// Create an EntryNotFound error
    pub fn entry_not_found(sequence: SequenceNumber) -> Self {
        LedgerError::EntryNotFound { sequence }
    }

    /// Create a DuplicateSequence error
    pub fn duplicate_sequence(sequence: SequenceNumber) -> Self {
        LedgerError::DuplicateSequence { sequence }
    }

    /// Create a Storage error
    pub fn storage(message: &str) -> Self {
        LedgerError::Storage {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "journal.csv".to_string() },
        "File not found: journal.csv"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_with_line(
        LedgerError::Csv { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::csv_without_line(
        LedgerError::Csv { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_date(
        LedgerError::invalid_date("2024-13-40"),
        "Invalid date '2024-13-40' (expected YYYY-MM-DD)"
    )]
    #[case::invalid_side(
        LedgerError::invalid_side("middle"),
        "Invalid side 'middle' (expected 'debit' or 'credit')"
    )]
    #[case::invalid_nature(LedgerError::invalid_nature("flavor"), "Invalid nature 'flavor'")]
    #[case::empty_description(
        LedgerError::EmptyDescription,
        "Entry description must not be empty"
    )]
    #[case::too_few_lines(
        LedgerError::TooFewLines { count: 1 },
        "Entry needs at least 2 lines, got 1"
    )]
    #[case::non_positive_amount(
        LedgerError::non_positive_amount("Caja", Decimal::new(-500, 2)),
        "Amount for account 'Caja' must be positive, got -5.00"
    )]
    #[case::unbalanced(
        LedgerError::unbalanced(Decimal::new(50000, 2), Decimal::new(40000, 2)),
        "Entry is unbalanced: debits 500.00, credits 400.00"
    )]
    #[case::entry_not_found(LedgerError::entry_not_found(999), "Entry 999 not found")]
    #[case::duplicate_sequence(
        LedgerError::duplicate_sequence(7),
        "Entry 7 already exists"
    )]
    #[case::storage(
        LedgerError::storage("transaction rolled back"),
        "Storage failure: transaction rolled back"
    )]
    #[case::invalid_month(
        LedgerError::InvalidMonth { year: 2024, month: 13 },
        "Invalid month 13 for year 2024"
    )]
    #[case::missing_period(
        LedgerError::MissingPeriod,
        "Trial balance needs --month or --from/--to"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
