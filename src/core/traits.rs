//! Ledger store contract
//!
//! This module defines the schema-level contract every journal backend must
//! honor: unique sequence numbers, whole-entry atomic writes, cascade on
//! delete, and the read queries the aggregation engine is built on.

use crate::types::{AccountLine, JournalEntry, LedgerError, SequenceNumber};
use chrono::NaiveDate;

/// Read view of one committed account line together with its entry context
///
/// Aggregations work line-by-line but need the owning entry's date,
/// sequence and description; this view carries both without cloning.
#[derive(Debug, Clone, Copy)]
pub struct PostedLine<'a> {
    /// Date of the owning entry
    pub date: NaiveDate,

    /// Sequence number of the owning entry
    pub sequence: SequenceNumber,

    /// Description of the owning entry
    pub description: &'a str,

    /// The line itself
    pub line: &'a AccountLine,
}

/// Durable record of journal entries and their account lines
///
/// Implementations must keep every entry's lines with the entry (an insert
/// makes the entry and all of its lines visible together or not at all,
/// and a delete removes them together). Readers must never observe a
/// half-written entry.
pub trait JournalStore {
    /// The sequence number the next posted entry will receive
    ///
    /// Defined as 1 + the highest committed sequence, 1 for an empty
    /// journal.
    fn next_sequence(&self) -> SequenceNumber;

    /// Insert a committed entry with all of its lines as one atomic unit
    ///
    /// # Errors
    ///
    /// * [`LedgerError::DuplicateSequence`] if the sequence is taken
    /// * [`LedgerError::Storage`] if the backend failed to commit; the
    ///   backend must roll back so no partial rows remain
    fn insert_entry(&mut self, entry: JournalEntry) -> Result<(), LedgerError>;

    /// Delete an entry and cascade to all of its lines
    ///
    /// Returns the removed entry so callers can report what was deleted.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::EntryNotFound`] if no entry has that sequence
    fn delete_entry(&mut self, sequence: SequenceNumber) -> Result<JournalEntry, LedgerError>;

    /// Look up an entry by sequence number
    fn entry(&self, sequence: SequenceNumber) -> Option<&JournalEntry>;

    /// Number of committed entries
    fn entry_count(&self) -> usize;

    /// All lines with entry dates `<= cutoff`, ordered by (date, sequence)
    fn lines_through(&self, cutoff: NaiveDate) -> Vec<PostedLine<'_>>;

    /// All lines with entry dates in `[start, end]`, ordered by
    /// (date, sequence)
    fn lines_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<PostedLine<'_>>;

    /// All lines for one account name, ordered by (date, sequence)
    fn lines_for_account(&self, account: &str) -> Vec<PostedLine<'_>>;

    /// Distinct account names across the journal, sorted
    fn account_names(&self) -> Vec<String>;
}
