//! Ledger Engine CLI
//!
//! Command-line interface for building financial reports from a
//! double-entry journal CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- journal.csv balance-sheet --as-of 2024-06-30 > balance.csv
//! cargo run -- journal.csv income-statement --through 2024-12-31 > results.csv
//! cargo run -- journal.csv trial-balance --month 2024-03 > trial.csv
//! cargo run -- journal.csv trial-balance --from 2024-01-01 --to 2024-06-30 --account Caja > trial.csv
//! cargo run -- journal.csv journal --account Caja > ledger.csv
//! ```
//!
//! The program loads the journal file into memory, validating and posting
//! each entry group; malformed or unbalanced groups are reported on stderr
//! and skipped. The selected report is written to stdout as CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, invalid period, etc.)

use ledger_engine::cli::{self, ReportCommand};
use ledger_engine::core::{MemoryJournal, ReportBuilder};
use ledger_engine::io::{
    load_journal, write_balance_sheet, write_income_statement, write_journal, write_trial_balance,
};
use ledger_engine::types::LedgerError;
use std::io::Write;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Load the journal and write the selected report
fn run(args: &cli::CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut journal = MemoryJournal::new();
    let summary = load_journal(&args.journal_file, &mut journal)?;
    if summary.skipped > 0 {
        eprintln!(
            "Warning: {} entry group(s) skipped, {} posted",
            summary.skipped, summary.posted
        );
    }

    let builder = ReportBuilder::new(&journal);
    match &args.report {
        ReportCommand::BalanceSheet { as_of } => {
            write_balance_sheet(&builder.balance_sheet(*as_of), output)
        }
        ReportCommand::IncomeStatement { through } => {
            write_income_statement(&builder.income_statement(*through), output)
        }
        ReportCommand::TrialBalance {
            month,
            from,
            to,
            account,
        } => {
            let period = cli::resolve_period(month.as_deref(), *from, *to)?;
            let rows = builder.account_activity(&period, account.as_deref());
            write_trial_balance(&rows, output)
        }
        ReportCommand::Journal { account } => {
            write_journal(&builder.ledger_rows(account.as_deref()), output)
        }
    }
}
