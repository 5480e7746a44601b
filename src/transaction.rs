use rust_decimal::Decimal;

pub type TransactionId = i64;

/// Transaction kind as tagged on the wire (`"ingreso"` / `"egreso"`).
/// Tags are matched case-insensitively. Anything unrecognised lands in
/// `Other` and aggregates like an expense, as the data source performs
/// no validation of the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    Other(String),
}

impl TransactionKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("ingreso") {
            TransactionKind::Income
        } else if tag.eq_ignore_ascii_case("egreso") {
            TransactionKind::Expense
        } else {
            TransactionKind::Other(tag.to_string())
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, TransactionKind::Income)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: Decimal,
    /// Raw ISO-8601 timestamp; only the `YYYY-MM-DD` prefix is displayed.
    pub date: String,
    pub description: String,
    pub owner: String,
}
