//! Journal file loading
//!
//! Provides a streaming iterator over journal rows from a CSV file and the
//! `load_journal` routine that groups rows into entries and posts them.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//!   and `load_journal`
//! - Individual row errors are recoverable: they are reported on stderr
//!   with their line number and poison the row's whole entry group, which
//!   is skipped without touching the store; loading continues with the
//!   next group. A failed row still names its `entry` column when that
//!   column is readable, so only the group it belongs to is poisoned.
//!
//! # Memory Efficiency
//!
//! Rows are read one at a time; only the entry group currently being
//! assembled is held in memory.

use crate::core::poster::EntryPoster;
use crate::core::traits::JournalStore;
use crate::io::csv_format::{convert_csv_record, CsvRecord, LineRecord};
use crate::types::{AccountLine, EntryDraft, LedgerError};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// A journal row that failed to parse
///
/// Carries the `entry` column's value when it was readable, so the loader
/// can poison exactly the group the row belongs to.
#[derive(Debug)]
pub struct RowFailure {
    /// Entry id the row claimed, if the column parsed
    pub entry: Option<u32>,

    /// What went wrong
    pub error: LedgerError,
}

/// Streaming CSV reader over journal rows
///
/// Yields one `Result<LineRecord, RowFailure>` per data row; failures
/// carry the offending line number (taken from the parser's position, so
/// multi-line quoted fields don't skew it) and the row's entry id when
/// readable. Row grouping is the caller's concern (see [`load_journal`]).
#[derive(Debug)]
pub struct JournalReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    entry_index: Option<usize>,
}

impl JournalReader {
    /// Open a journal CSV file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and tolerates
    /// flexible field counts.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::FileNotFound`] if the path does not exist
    /// * [`LedgerError::Io`] if the file could not be opened
    /// * [`LedgerError::Csv`] if the header row could not be read
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            return Err(LedgerError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let entry_index = headers.iter().position(|name| name == "entry");

        Ok(Self {
            reader,
            headers,
            entry_index,
        })
    }

    /// The `entry` column of a raw row, if present and numeric
    fn entry_of(&self, raw: &StringRecord) -> Option<u32> {
        self.entry_index
            .and_then(|index| raw.get(index))
            .and_then(|value| value.parse().ok())
    }
}

impl Iterator for JournalReader {
    type Item = Result<LineRecord, RowFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = StringRecord::new();
        match self.reader.read_record(&mut raw) {
            Ok(false) => None,
            Ok(true) => {
                let line = raw.position().map(|pos| pos.line());
                let entry = self.entry_of(&raw);

                let converted = raw
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(LedgerError::from)
                    .and_then(|record| {
                        convert_csv_record(record).map_err(|e| LedgerError::Csv {
                            line,
                            message: e.to_string(),
                        })
                    });

                Some(converted.map_err(|error| RowFailure { entry, error }))
            }
            Err(e) => Some(Err(RowFailure {
                entry: None,
                error: LedgerError::from(e),
            })),
        }
    }
}

/// Outcome of loading a journal file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entry groups validated and committed
    pub posted: usize,

    /// Entry groups dropped (parse error or failed validation)
    pub skipped: usize,
}

/// An entry group being assembled from consecutive rows
struct PendingEntry {
    entry: u32,
    date: NaiveDate,
    description: String,
    lines: Vec<AccountLine>,
}

/// Load a journal CSV file into a store
///
/// Consecutive rows sharing an `entry` value form one candidate entry,
/// dated and described by the group's first row. Each completed group is
/// posted through the [`EntryPoster`], so it is validated in full and
/// committed atomically.
///
/// A row that fails to parse poisons its whole group: the group is
/// reported on stderr and skipped in full (no partial entry is ever
/// assembled from its surviving rows), and loading continues with the
/// next group. A bad row opening a new group does not disturb the
/// already-completed group before it. Groups that fail validation
/// (unbalanced, too few lines, ...) are handled the same way. The
/// returned summary counts both outcomes.
///
/// # Errors
///
/// * [`LedgerError::FileNotFound`] if the path does not exist
/// * [`LedgerError::Io`] if the file could not be opened
/// * [`LedgerError::Csv`] if the header row could not be read
pub fn load_journal<S: JournalStore>(
    path: &Path,
    store: &mut S,
) -> Result<LoadSummary, LedgerError> {
    let reader = JournalReader::new(path)?;
    let mut poster = EntryPoster::new(store);
    let mut summary = LoadSummary::default();

    let mut pending: Option<PendingEntry> = None;
    let mut poisoned: Option<u32> = None;

    for row in reader {
        match row {
            Ok(record) => {
                if poisoned == Some(record.entry) {
                    continue;
                }
                poisoned = None;

                let same_group = pending.as_ref().map(|p| p.entry) == Some(record.entry);
                if same_group {
                    if let Some(group) = pending.as_mut() {
                        group.lines.push(record.line);
                    }
                } else {
                    flush(&mut poster, pending.take(), &mut summary);
                    pending = Some(PendingEntry {
                        entry: record.entry,
                        date: record.date,
                        description: record.description,
                        lines: vec![record.line],
                    });
                }
            }
            Err(failed) => {
                eprintln!("Error: {}", failed.error);
                match failed.entry {
                    Some(id) if poisoned == Some(id) => {
                        // Another bad row of an already-poisoned group
                    }
                    Some(id) => {
                        // Drop the group this row belongs to; a finished
                        // group before it still posts normally.
                        if pending.as_ref().map(|p| p.entry) != Some(id) {
                            flush(&mut poster, pending.take(), &mut summary);
                        }
                        pending = None;
                        poisoned = Some(id);
                        summary.skipped += 1;
                    }
                    None => match pending.take() {
                        // Row too mangled to name its group; assume it
                        // belongs to the one being assembled.
                        Some(group) => {
                            poisoned = Some(group.entry);
                            summary.skipped += 1;
                        }
                        None if poisoned.is_none() => summary.skipped += 1,
                        None => {}
                    },
                }
            }
        }
    }
    flush(&mut poster, pending.take(), &mut summary);

    Ok(summary)
}

/// Post a completed group; validation failures are recoverable
fn flush<S: JournalStore>(
    poster: &mut EntryPoster<'_, S>,
    pending: Option<PendingEntry>,
    summary: &mut LoadSummary,
) {
    let group = match pending {
        Some(group) => group,
        None => return,
    };

    let draft = EntryDraft {
        date: group.date,
        description: group.description,
        lines: group.lines,
    };
    match poster.post(draft) {
        Ok(_) => summary.posted += 1,
        Err(e) => {
            eprintln!("Error: entry {} skipped: {}", group.entry, e);
            summary.skipped += 1;
        }
    }
}
