//! Ledger Engine Library
//! # Overview
//!
//! This library provides a double-entry bookkeeping engine: journal entries
//! are loaded from CSV, validated and posted atomically, and aggregated on
//! demand into financial reports.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (JournalEntry, AccountLine, reports, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::store`] - Journal storage with atomic entry commits
//!   - [`core::poster`] - Entry validation and sequence assignment
//!   - [`core::classifier`] - Balance-sheet section and bucket taxonomy
//!   - [`core::engine`] - Derived report aggregation
//! - [`io`] - Journal CSV loading and report CSV output
//!
//! # Reports
//!
//! Four reports are derived from the journal, never stored:
//!
//! - **Balance sheet**: assets, liabilities and equity as of a focal date,
//!   bucketed by the classifier's taxonomy with a current/non-current split
//! - **Income statement**: one calendar year's results, from sales down to
//!   the net result after the 25% tax provision
//! - **Trial balance**: per-account opening, movement and closing figures
//!   over a month or an explicit date range
//! - **Journal listing**: every line in chronological order, Debit and
//!   Credit in separate columns
//!
//! # Double-entry Rules
//!
//! Every posted entry has:
//! - at least two lines, each with a strictly positive amount
//! - Debit and Credit totals equal within a 0.01 tolerance
//! - a unique sequence number assigned at posting time
//!
//! Entries commit atomically with all of their lines; an entry that fails
//! validation leaves the journal untouched.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{EntryPoster, JournalStore, MemoryJournal, ReportBuilder};
pub use io::{load_journal, LoadSummary};
pub use types::{
    AccountActivity, AccountLine, BalanceSheet, EntryDraft, IncomeStatement, JournalEntry,
    LedgerError, LedgerRow, Nature, ReportingPeriod, SequenceNumber, Side,
};
