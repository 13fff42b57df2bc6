//! IO module
//!
//! Contains the file-facing surface of the engine:
//! - `csv_format`: journal CSV record parsing (pure, no I/O)
//! - `journal_reader`: streaming reader and entry-group loading
//! - `report_writer`: CSV serialization of materialized reports

pub mod csv_format;
pub mod journal_reader;
pub mod report_writer;

pub use csv_format::{convert_csv_record, CsvRecord, LineRecord};
pub use journal_reader::{load_journal, JournalReader, LoadSummary, RowFailure};
pub use report_writer::{
    write_balance_sheet, write_income_statement, write_journal, write_trial_balance,
};
