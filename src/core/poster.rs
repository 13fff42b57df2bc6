//! Entry validation and posting
//!
//! This module provides the `EntryPoster`, the only write path into a
//! journal store. A candidate entry is validated in full before anything
//! touches the store:
//!
//! - the date must be a real calendar date (guaranteed by `NaiveDate`)
//! - the description must be non-empty
//! - at least two lines
//! - every amount strictly positive
//! - Debit and Credit totals equal within a 0.01 tolerance
//!
//! Only then is the next sequence number assigned and the entry inserted
//! as one atomic unit. If validation or the insert fails, the store is
//! left exactly as it was.

use crate::core::traits::JournalStore;
use crate::types::{EntryDraft, JournalEntry, LedgerError, SequenceNumber, Side};
use rust_decimal::Decimal;

/// Largest tolerated difference between Debit and Credit totals
fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Validating write handle over a journal store
///
/// Holds an exclusive borrow of the store for the duration of a posting
/// session; reads go through a separate [`ReportBuilder`] once the poster
/// is dropped.
///
/// [`ReportBuilder`]: crate::core::engine::ReportBuilder
pub struct EntryPoster<'a, S: JournalStore> {
    store: &'a mut S,
}

impl<'a, S: JournalStore> EntryPoster<'a, S> {
    /// Create a poster writing into `store`
    pub fn new(store: &'a mut S) -> Self {
        EntryPoster { store }
    }

    /// Validate and commit a candidate entry
    ///
    /// On success the entry is assigned `1 + max(existing sequence)` and
    /// becomes visible with all of its lines at once.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::EmptyDescription`] - blank description
    /// * [`LedgerError::TooFewLines`] - fewer than two lines
    /// * [`LedgerError::NonPositiveAmount`] - a zero or negative amount
    /// * [`LedgerError::Unbalanced`] - Debit/Credit totals differ by more
    ///   than 0.01
    /// * [`LedgerError::Storage`] - the backend failed to commit; nothing
    ///   was written
    pub fn post(&mut self, draft: EntryDraft) -> Result<SequenceNumber, LedgerError> {
        validate(&draft)?;

        let sequence = self.store.next_sequence();
        self.store.insert_entry(JournalEntry {
            date: draft.date,
            sequence,
            description: draft.description,
            lines: draft.lines,
        })?;

        Ok(sequence)
    }

    /// Delete a committed entry and all of its lines
    ///
    /// # Errors
    ///
    /// * [`LedgerError::EntryNotFound`] - no entry has that sequence
    pub fn delete(&mut self, sequence: SequenceNumber) -> Result<(), LedgerError> {
        self.store.delete_entry(sequence).map(|_| ())
    }
}

/// Check every structural rule before anything is written
fn validate(draft: &EntryDraft) -> Result<(), LedgerError> {
    if draft.description.trim().is_empty() {
        return Err(LedgerError::EmptyDescription);
    }

    if draft.lines.len() < 2 {
        return Err(LedgerError::TooFewLines {
            count: draft.lines.len(),
        });
    }

    for line in &draft.lines {
        if line.amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(&line.account, line.amount));
        }
    }

    let debits: Decimal = draft
        .lines
        .iter()
        .filter(|line| line.side == Side::Debit)
        .map(|line| line.amount)
        .sum();
    let credits: Decimal = draft
        .lines
        .iter()
        .filter(|line| line.side == Side::Credit)
        .map(|line| line.amount)
        .sum();

    if (debits - credits).abs() > balance_tolerance() {
        return Err(LedgerError::unbalanced(debits, credits));
    }

    Ok(())
}
