//! End-to-end integration tests
//!
//! These tests validate the complete pipeline using predefined CSV test
//! fixtures. Each test:
//! 1. Loads journal.csv from a fixture directory into a store
//! 2. Builds the fixture's report through the aggregation engine
//! 3. Serializes the report to CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Balance sheet classification (buckets, totals, zero buckets)
//! - Income statement derivation and the tax provision
//! - Trial balance opening/movement/closing over a month
//! - Rejection of unbalanced entry groups during loading
//! - The 365-day current/non-current aging boundary

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ledger_engine::core::{JournalStore, MemoryJournal, ReportBuilder};
    use ledger_engine::io::{
        load_journal, write_balance_sheet, write_income_statement, write_trial_balance,
        LoadSummary,
    };
    use ledger_engine::types::{LedgerError, ReportingPeriod};
    use std::fs;
    use std::path::Path;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Load a fixture's journal.csv into a fresh store
    fn load_fixture(fixture_name: &str) -> (MemoryJournal, LoadSummary) {
        let input_path = format!("tests/fixtures/{}/journal.csv", fixture_name);
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut journal = MemoryJournal::new();
        let summary = load_journal(Path::new(&input_path), &mut journal)
            .unwrap_or_else(|e| panic!("Failed to load journal: {}", e));
        (journal, summary)
    }

    /// Build a fixture's report and compare it against expected.csv
    ///
    /// # Panics
    ///
    /// Panics if the expected file cannot be read or the output differs.
    fn assert_report<F>(fixture_name: &str, journal: &MemoryJournal, build: F)
    where
        F: FnOnce(&ReportBuilder<'_, MemoryJournal>, &mut Vec<u8>) -> Result<(), LedgerError>,
    {
        let expected_path = format!("tests/fixtures/{}/expected.csv", fixture_name);
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        let builder = ReportBuilder::new(journal);
        let mut output = Vec::new();
        build(&builder, &mut output).unwrap_or_else(|e| panic!("Failed to build report: {}", e));

        let actual_output = String::from_utf8(output).expect("Report output is not UTF-8");
        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[test]
    fn test_balance_sheet_fixture() {
        let (journal, summary) = load_fixture("balance_sheet");
        assert_eq!(summary.skipped, 0);

        assert_report("balance_sheet", &journal, |builder, output| {
            write_balance_sheet(&builder.balance_sheet(date(2024, 6, 30)), output)
        });
    }

    #[test]
    fn test_income_statement_fixture() {
        let (journal, summary) = load_fixture("income_statement");
        assert_eq!(summary.skipped, 0);

        assert_report("income_statement", &journal, |builder, output| {
            write_income_statement(&builder.income_statement(date(2024, 12, 31)), output)
        });
    }

    #[test]
    fn test_income_statement_loss_fixture() {
        let (journal, _) = load_fixture("income_statement_loss");

        assert_report("income_statement_loss", &journal, |builder, output| {
            write_income_statement(&builder.income_statement(date(2024, 12, 31)), output)
        });
    }

    #[test]
    fn test_trial_balance_fixture() {
        let (journal, _) = load_fixture("trial_balance");

        assert_report("trial_balance", &journal, |builder, output| {
            let period = ReportingPeriod::month(2024, 3)?;
            write_trial_balance(&builder.account_activity(&period, None), output)
        });
    }

    #[test]
    fn test_unbalanced_group_is_skipped_whole() {
        let (journal, summary) = load_fixture("unbalanced_skipped");

        // The unbalanced group left nothing behind; the balanced one posted
        assert_eq!(summary, LoadSummary { posted: 1, skipped: 1 });
        assert_eq!(journal.entry_count(), 1);

        assert_report("unbalanced_skipped", &journal, |builder, output| {
            write_income_statement(&builder.income_statement(date(2024, 12, 31)), output)
        });
    }

    #[test]
    fn test_aging_boundary_fixture() {
        let (journal, summary) = load_fixture("aging_boundary");
        assert_eq!(summary.skipped, 0);

        assert_report("aging_boundary", &journal, |builder, output| {
            write_balance_sheet(&builder.balance_sheet(date(2024, 6, 30)), output)
        });
    }
}
