use rust_decimal::{Decimal, RoundingStrategy};

use crate::balance;
use crate::transaction::{Transaction, TransactionId};

/// Sign of the aggregate balance. The formatted string carries a `-` only
/// when the value itself is negative; the status exists so a rendering
/// surface can pick a colour without re-parsing the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    NonNegative,
    Negative,
}

/// Presentational classification of a row, derived from the same
/// case-insensitive kind match the aggregator uses. It does not alter the
/// sign of the formatted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountStatus {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Stable identity for key-based list diffing. Duplicate keys are
    /// passed through as-is; coalescing is the consumer's concern.
    pub key: TransactionId,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub status: AmountStatus,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationModel {
    pub balance: String,
    pub balance_status: BalanceStatus,
    pub rows: Vec<Row>,
}

/// Project a decoded statement into its display form: a formatted balance
/// plus one row per transaction in the original order. Pure and
/// repeatable, safe to call on every redraw.
pub fn present(transactions: &[Transaction]) -> PresentationModel {
    let total = balance::total(transactions);
    PresentationModel {
        balance: format_amount(total),
        balance_status: if total < Decimal::ZERO {
            BalanceStatus::Negative
        } else {
            BalanceStatus::NonNegative
        },
        rows: transactions.iter().map(row).collect(),
    }
}

fn row(transaction: &Transaction) -> Row {
    Row {
        key: transaction.id,
        // Character-based truncation, matching `YYYY-MM-DD`. The date is
        // never parsed or validated here.
        date: transaction.date.chars().take(10).collect(),
        description: transaction.description.clone(),
        amount: format_amount(transaction.amount),
        status: if transaction.kind.is_income() {
            AmountStatus::Income
        } else {
            AmountStatus::Expense
        },
        owner: transaction.owner.clone(),
    }
}

/// Format an amount with exactly two decimals and comma-grouped integer
/// digits, e.g. `4900.5` -> `"4,900.50"`. Midpoints round away from zero,
/// like `%,.2f`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{rounded:.2}");
    match body.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&body),
    }
}

fn group_thousands(body: &str) -> String {
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos..]),
        None => (body, ""),
    };
    let mut grouped = String::new();
    for (count, ch) in int_part.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    format!("{grouped}{frac_part}")
}
