//! Journal entry types for the ledger engine
//!
//! This module defines the building blocks of the journal: entries, the
//! account lines they own, and the Debit/Credit and nature vocabulary that
//! drives sign conventions and classification.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Journal entry sequence number
///
/// Assigned monotonically by the poster: 1 + the highest existing
/// sequence, starting at 1 for an empty journal.
pub type SequenceNumber = u32;

/// Side of a double-entry movement
///
/// Every account line is either a Debit or a Credit. A committed entry's
/// Debit total and Credit total must agree within the balance tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

/// Accounting nature of a line (the original schema's "tipo2" tag)
///
/// The nature decides two things: which financial statement a line feeds
/// (Asset/Liability/Equity go to the balance sheet, the rest to the income
/// statement) and which side is the "normal", positive direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
    Sales,
    CostOfSales,
}

impl Nature {
    /// The side on which balances of this nature grow
    ///
    /// Assets and expenses are debit-normal; liabilities, equity, income,
    /// sales and cost of sales are credit-normal. Both statement
    /// computations consume this single lookup so the sign conventions
    /// cannot drift apart.
    pub fn normal_side(&self) -> Side {
        match self {
            Nature::Asset | Nature::Expense => Side::Debit,
            Nature::Liability
            | Nature::Equity
            | Nature::Income
            | Nature::Sales
            | Nature::CostOfSales => Side::Credit,
        }
    }
}

/// One Debit or Credit movement within a journal entry
///
/// Amounts are strictly positive; the direction of the movement is carried
/// by `side`, never by the sign of `amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountLine {
    /// Free-text account name ("Caja", "Proveedores", ...)
    pub account: String,

    /// Movement amount, always positive
    pub amount: Decimal,

    /// Debit or Credit
    pub side: Side,

    /// Accounting nature driving sign convention and classification
    pub nature: Nature,
}

impl AccountLine {
    /// Signed magnitude of this line under its nature's normal-side convention
    ///
    /// `+amount` when the line sits on its nature's normal side, `-amount`
    /// otherwise. A Debit asset line is positive; a Credit asset line is
    /// negative; a Credit liability line is positive; and so on.
    pub fn signed_amount(&self) -> Decimal {
        if self.side == self.nature.normal_side() {
            self.amount
        } else {
            -self.amount
        }
    }
}

/// A committed journal entry
///
/// The entry exclusively owns its lines: deleting the entry drops all of
/// them, and a line without a parent entry is unrepresentable. Committed
/// entries are immutable except for full deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// Entry date (the date every owned line is aged and filtered by)
    pub date: NaiveDate,

    /// Unique, monotonically assigned sequence number
    pub sequence: SequenceNumber,

    /// Non-empty description
    pub description: String,

    /// The entry's movements, at least two, balanced within tolerance
    pub lines: Vec<AccountLine>,
}

/// A candidate entry handed to the poster
///
/// Same shape as [`JournalEntry`] minus the sequence number, which the
/// poster assigns on successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub description: String,
    pub lines: Vec<AccountLine>,
}
