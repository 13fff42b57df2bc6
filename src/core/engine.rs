//! Aggregation engine
//!
//! The `ReportBuilder` is the read side of the ledger: it folds posted
//! lines into fully materialized reports. Every report is derived on
//! demand from the journal; no aggregate is ever stored, so reports can
//! never go stale relative to the entries.
//!
//! Sign conventions are centralized in [`AccountLine::signed_amount`]:
//! the balance sheet and the income statement both fold signed amounts
//! under each nature's normal side, which keeps liabilities and equity
//! positive when credit-heavy and makes the two statements agree by
//! construction.
//!
//! [`AccountLine::signed_amount`]: crate::types::AccountLine::signed_amount

use crate::core::classifier::{bucket_names, classify};
use crate::core::traits::{JournalStore, PostedLine};
use crate::types::{
    AccountActivity, BalanceSheet, BucketTotal, IncomeStatement, LedgerRow, Nature,
    ReportingPeriod, Section, SectionReport, Side,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Income tax rate applied to a positive result before tax
fn tax_rate() -> Decimal {
    Decimal::new(25, 2) // 0.25
}

/// Read-only report builder over a journal store
///
/// Cheap to construct; build one per report batch and let it go.
pub struct ReportBuilder<'a, S: JournalStore> {
    store: &'a S,
}

impl<'a, S: JournalStore> ReportBuilder<'a, S> {
    /// Create a builder reading from `store`
    pub fn new(store: &'a S) -> Self {
        ReportBuilder { store }
    }

    /// Build the balance sheet as of a focal date
    ///
    /// Considers every line dated on or before `as_of`. Each asset,
    /// liability or equity line is classified by account name, nature and
    /// age relative to the focal date, and its signed amount is folded
    /// into the matching bucket. Income-statement natures are skipped
    /// here; their year-to-date effect surfaces as `net_result_of_year`.
    ///
    /// Every bucket of every section appears in the result, zeros
    /// included, in taxonomy order.
    pub fn balance_sheet(&self, as_of: NaiveDate) -> BalanceSheet {
        let mut totals: BTreeMap<Section, BTreeMap<&'static str, Decimal>> = Section::ALL
            .iter()
            .map(|&section| {
                let buckets = bucket_names(section)
                    .into_iter()
                    .map(|name| (name, Decimal::ZERO))
                    .collect();
                (section, buckets)
            })
            .collect();

        for posted in self.store.lines_through(as_of) {
            let age_days = (as_of - posted.date).num_days();
            let classification = match classify(&posted.line.account, posted.line.nature, age_days)
            {
                Some(c) => c,
                None => continue,
            };

            if let Some(total) = totals
                .get_mut(&classification.section)
                .and_then(|buckets| buckets.get_mut(classification.bucket))
            {
                *total += posted.line.signed_amount();
            }
        }

        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let by_bucket = &totals[&section];
                let buckets: Vec<BucketTotal> = bucket_names(section)
                    .into_iter()
                    .map(|name| BucketTotal {
                        bucket: name,
                        total: by_bucket[name],
                    })
                    .collect();
                let total = buckets.iter().map(|b| b.total).sum();
                SectionReport {
                    section,
                    buckets,
                    total,
                }
            })
            .collect();

        BalanceSheet {
            as_of,
            sections,
            net_result_of_year: self.income_statement(as_of).net_result,
        }
    }

    /// Build the income statement for the calendar year containing `through`
    ///
    /// Folds the signed amounts of income-statement lines dated within the
    /// year. Sales, cost of sales and other income are credit-normal, so a
    /// debit-heavy cost of sales reports negative; expenses are
    /// debit-normal and report positive. The derived chain is
    ///
    /// ```text
    /// gross_margin      = sales + cost_of_sales
    /// operating_result  = gross_margin - expenses
    /// result_before_tax = operating_result + other_income
    /// tax_provision     = 25% of result_before_tax when positive, else 0
    /// net_result        = result_before_tax - tax_provision
    /// ```
    pub fn income_statement(&self, through: NaiveDate) -> IncomeStatement {
        let period = ReportingPeriod::calendar_year(through);

        let mut sales = Decimal::ZERO;
        let mut cost_of_sales = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        let mut other_income = Decimal::ZERO;

        for posted in self.store.lines_between(period.start, period.end) {
            let signed = posted.line.signed_amount();
            match posted.line.nature {
                Nature::Sales => sales += signed,
                Nature::CostOfSales => cost_of_sales += signed,
                Nature::Expense => expenses += signed,
                Nature::Income => other_income += signed,
                Nature::Asset | Nature::Liability | Nature::Equity => {}
            }
        }

        let gross_margin = sales + cost_of_sales;
        let operating_result = gross_margin - expenses;
        let result_before_tax = operating_result + other_income;
        let tax_provision = if result_before_tax > Decimal::ZERO {
            result_before_tax * tax_rate()
        } else {
            Decimal::ZERO
        };

        IncomeStatement {
            year: through.year(),
            sales,
            cost_of_sales,
            expenses,
            other_income,
            gross_margin,
            operating_result,
            result_before_tax,
            tax_provision,
            net_result: result_before_tax - tax_provision,
        }
    }

    /// Build trial-balance rows for a reporting period
    ///
    /// Per account: the opening balance is the Debit-minus-Credit sum of
    /// lines dated exactly on the period's first day, the movement totals
    /// cover the rest of the period, and the closing balance is
    /// `opening + debits - credits`. Accounts with no lines anywhere in
    /// the period are omitted; an empty result is valid output.
    ///
    /// Pass `account` to restrict the report to one account name.
    pub fn account_activity(
        &self,
        period: &ReportingPeriod,
        account: Option<&str>,
    ) -> Vec<AccountActivity> {
        let mut rows: BTreeMap<String, AccountActivity> = BTreeMap::new();

        for posted in self.store.lines_between(period.start, period.end) {
            if let Some(wanted) = account {
                if posted.line.account != wanted {
                    continue;
                }
            }

            let row = rows
                .entry(posted.line.account.clone())
                .or_insert_with(|| AccountActivity {
                    account: posted.line.account.clone(),
                    opening: Decimal::ZERO,
                    debits: Decimal::ZERO,
                    credits: Decimal::ZERO,
                    closing: Decimal::ZERO,
                });

            if posted.date == period.start {
                // Opening lines carry their side as a sign, not a movement.
                match posted.line.side {
                    Side::Debit => row.opening += posted.line.amount,
                    Side::Credit => row.opening -= posted.line.amount,
                }
            } else {
                match posted.line.side {
                    Side::Debit => row.debits += posted.line.amount,
                    Side::Credit => row.credits += posted.line.amount,
                }
            }
        }

        rows.into_values()
            .map(|mut row| {
                row.closing = row.opening + row.debits - row.credits;
                row
            })
            .collect()
    }

    /// Build the chronological ledger listing
    ///
    /// Without an account filter, every line in the journal in
    /// (date, sequence) order; with one, only that account's lines.
    pub fn ledger_rows(&self, account: Option<&str>) -> Vec<LedgerRow> {
        let lines = match account {
            Some(name) => self.store.lines_for_account(name),
            None => self.store.lines_through(NaiveDate::MAX),
        };

        lines.into_iter().map(to_ledger_row).collect()
    }
}

fn to_ledger_row(posted: PostedLine<'_>) -> LedgerRow {
    LedgerRow {
        account: posted.line.account.clone(),
        date: posted.date,
        sequence: posted.sequence,
        description: posted.description.to_string(),
        side: posted.line.side,
        amount: posted.line.amount,
    }
}
