use crate::types::{LedgerError, ReportingPeriod};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build financial reports from a double-entry journal
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(about = "Build financial reports from a double-entry journal", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing journal rows
    #[arg(value_name = "JOURNAL", help = "Path to the journal CSV file")]
    pub journal_file: PathBuf,

    /// Report to build from the loaded journal
    #[command(subcommand)]
    pub report: ReportCommand,
}

/// Available reports
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ReportCommand {
    /// Balance sheet as of a focal date
    BalanceSheet {
        /// Focal date; lines dated after it are ignored
        #[arg(long = "as-of", value_name = "DATE")]
        as_of: NaiveDate,
    },

    /// Income statement for the calendar year of a date
    IncomeStatement {
        /// Any date inside the wanted calendar year
        #[arg(long = "through", value_name = "DATE")]
        through: NaiveDate,
    },

    /// Trial balance over a month or an explicit date range
    TrialBalance {
        /// Calendar month selector
        #[arg(long = "month", value_name = "YYYY-MM", conflicts_with_all = ["from", "to"])]
        month: Option<String>,

        /// Range start (inclusive), paired with --to
        #[arg(long = "from", value_name = "DATE", requires = "to")]
        from: Option<NaiveDate>,

        /// Range end (inclusive), paired with --from
        #[arg(long = "to", value_name = "DATE", requires = "from")]
        to: Option<NaiveDate>,

        /// Restrict the report to one account name
        #[arg(long = "account", value_name = "NAME")]
        account: Option<String>,
    },

    /// Chronological ledger listing
    Journal {
        /// Restrict the listing to one account name
        #[arg(long = "account", value_name = "NAME")]
        account: Option<String>,
    },
}

/// Resolve the trial balance's period selectors into a reporting period
///
/// # Errors
///
/// * [`LedgerError::InvalidDate`] for a `--month` value not shaped `YYYY-MM`
/// * [`LedgerError::InvalidMonth`] for a month outside 1-12
/// * [`LedgerError::InvalidPeriod`] for an inverted `--from`/`--to` range
/// * [`LedgerError::MissingPeriod`] when no selector was given
pub fn resolve_period(
    month: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<ReportingPeriod, LedgerError> {
    match (month, from, to) {
        (Some(value), _, _) => month_period(value),
        (None, Some(start), Some(end)) => ReportingPeriod::custom(start, end),
        _ => Err(LedgerError::MissingPeriod),
    }
}

/// Parse a `YYYY-MM` selector into that month's period
fn month_period(value: &str) -> Result<ReportingPeriod, LedgerError> {
    let (year_str, month_str) = value
        .trim()
        .split_once('-')
        .ok_or_else(|| LedgerError::invalid_date(value))?;

    let year: i32 = year_str
        .parse()
        .map_err(|_| LedgerError::invalid_date(value))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| LedgerError::invalid_date(value))?;

    ReportingPeriod::month(year, month)
}
