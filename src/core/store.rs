//! In-memory journal store
//!
//! This module provides `MemoryJournal`, the in-process implementation of
//! the [`JournalStore`] contract. Entries live in a BTreeMap keyed by
//! sequence number and exclusively own their lines, so referential
//! integrity and delete cascade hold by construction: a line cannot exist
//! without its parent entry, and removing the entry removes its lines with
//! it.
//!
//! Inserting an entry is a single map insert, so readers see the entry
//! with all of its lines or not at all.

use crate::core::traits::{JournalStore, PostedLine};
use crate::types::{JournalEntry, LedgerError, SequenceNumber};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// In-memory journal keyed by sequence number
pub struct MemoryJournal {
    /// Map of sequence number to committed entry (with its lines)
    entries: BTreeMap<SequenceNumber, JournalEntry>,
}

impl MemoryJournal {
    /// Create a new empty journal
    pub fn new() -> Self {
        MemoryJournal {
            entries: BTreeMap::new(),
        }
    }

    /// Collect lines from entries passing `filter`, ordered by (date, sequence)
    fn collect_lines<F>(&self, filter: F) -> Vec<PostedLine<'_>>
    where
        F: Fn(&JournalEntry) -> bool,
    {
        let mut entries: Vec<&JournalEntry> =
            self.entries.values().filter(|e| filter(e)).collect();
        entries.sort_by_key(|e| (e.date, e.sequence));

        entries
            .into_iter()
            .flat_map(|entry| {
                entry.lines.iter().map(move |line| PostedLine {
                    date: entry.date,
                    sequence: entry.sequence,
                    description: &entry.description,
                    line,
                })
            })
            .collect()
    }
}

impl JournalStore for MemoryJournal {
    fn next_sequence(&self) -> SequenceNumber {
        self.entries.keys().next_back().copied().unwrap_or(0) + 1
    }

    fn insert_entry(&mut self, entry: JournalEntry) -> Result<(), LedgerError> {
        if self.entries.contains_key(&entry.sequence) {
            return Err(LedgerError::duplicate_sequence(entry.sequence));
        }
        self.entries.insert(entry.sequence, entry);
        Ok(())
    }

    fn delete_entry(&mut self, sequence: SequenceNumber) -> Result<JournalEntry, LedgerError> {
        self.entries
            .remove(&sequence)
            .ok_or_else(|| LedgerError::entry_not_found(sequence))
    }

    fn entry(&self, sequence: SequenceNumber) -> Option<&JournalEntry> {
        self.entries.get(&sequence)
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn lines_through(&self, cutoff: NaiveDate) -> Vec<PostedLine<'_>> {
        self.collect_lines(|entry| entry.date <= cutoff)
    }

    fn lines_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<PostedLine<'_>> {
        self.collect_lines(|entry| start <= entry.date && entry.date <= end)
    }

    fn lines_for_account(&self, account: &str) -> Vec<PostedLine<'_>> {
        // collect_lines already orders by (date, sequence)
        self.collect_lines(|_| true)
            .into_iter()
            .filter(|posted| posted.line.account == account)
            .collect()
    }

    fn account_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .entries
            .values()
            .flat_map(|entry| entry.lines.iter().map(|line| line.account.as_str()))
            .collect();
        names.into_iter().map(String::from).collect()
    }
}

impl Default for MemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}
