//! Financial aggregation and currency conversion.
//!
//! All arithmetic works over base-currency amounts; conversion is a pure
//! function of the selected display currency and the fixed rate table, and
//! is always computed fresh from the stored amount so repeated renders never
//! compound.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::records::{Client, ClientStatus, FinancialRecord, RecordKind};

/// Supported display currencies. Amounts are persisted in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Currency {
    /// The base currency.
    #[default]
    USD,
    /// Euro.
    EUR,
    /// Indian rupee.
    INR,
}

impl Currency {
    /// Fixed exchange rate from the base currency. No live FX fetch.
    pub fn rate(self) -> f64 {
        match self {
            Self::USD => 1.0,
            Self::EUR => 0.93,
            Self::INR => 83.45,
        }
    }

    /// Convert a base-currency amount for display.
    pub fn convert(self, base_amount: f64) -> f64 {
        base_amount * self.rate()
    }
}

/// Copy of the records with amounts converted for display. The inputs keep
/// their base-currency amounts untouched.
pub fn converted_records(records: &[FinancialRecord], currency: Currency) -> Vec<FinancialRecord> {
    records
        .iter()
        .map(|record| FinancialRecord {
            amount: currency.convert(record.amount),
            ..record.clone()
        })
        .collect()
}

/// Aggregate figures for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Sum of revenue amounts dated inside the period.
    pub revenue: f64,
    /// Sum of expense amounts dated inside the period.
    pub expenses: f64,
    /// Revenue minus expenses.
    pub profit: f64,
    /// Count of clients currently active. This is a present-moment
    /// snapshot, not a historical figure for the period.
    pub client_count: usize,
}

/// Summarise records dated in `[start, end_exclusive)`.
pub fn summarize(
    records: &[FinancialRecord],
    clients: &[Client],
    start: NaiveDate,
    end_exclusive: NaiveDate,
) -> PeriodSummary {
    let mut revenue = 0.0;
    let mut expenses = 0.0;
    for record in records {
        if record.date < start || record.date >= end_exclusive {
            continue;
        }
        match record.kind {
            RecordKind::Revenue => revenue += record.amount,
            RecordKind::Expense => expenses += record.amount,
        }
    }
    let client_count = clients
        .iter()
        .filter(|client| client.status == ClientStatus::Active)
        .count();
    PeriodSummary {
        revenue,
        expenses,
        profit: revenue - expenses,
        client_count,
    }
}

/// Month-over-month percentage change. A zero previous period is defined as
/// 100% when the current value is positive and 0% otherwise, so the figure
/// is always well defined.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 { 100.0 } else { 0.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Current month compared against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthOverMonth {
    /// Summary for the month containing `today`.
    pub current: PeriodSummary,
    /// Summary for the month before it.
    pub previous: PeriodSummary,
    /// Revenue change, percent.
    pub revenue_change: f64,
    /// Expense change, percent.
    pub expenses_change: f64,
    /// Profit change, percent.
    pub profit_change: f64,
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn next_month_start(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let candidate = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    candidate.unwrap_or(date)
}

fn previous_month_start(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    month_start(first.pred_opt().unwrap_or(first))
}

/// Pair the calendar month containing `today` with the month before it.
pub fn month_over_month(
    records: &[FinancialRecord],
    clients: &[Client],
    today: NaiveDate,
) -> MonthOverMonth {
    let current_start = month_start(today);
    let current = summarize(records, clients, current_start, next_month_start(today));
    let previous = summarize(
        records,
        clients,
        previous_month_start(today),
        current_start,
    );
    MonthOverMonth {
        revenue_change: percent_change(current.revenue, previous.revenue),
        expenses_change: percent_change(current.expenses, previous.expenses),
        profit_change: percent_change(current.profit, previous.profit),
        current,
        previous,
    }
}
