use rust_decimal::Decimal;

use crate::transaction::Transaction;

/// Compute the signed balance of a statement: income adds, everything
/// else subtracts. Every record is visited exactly once; an unrecognised
/// kind is not an error, it simply falls into the subtraction branch.
pub fn total(transactions: &[Transaction]) -> Decimal {
    transactions.iter().fold(Decimal::ZERO, |total, transaction| {
        if transaction.kind.is_income() {
            total + transaction.amount
        } else {
            total - transaction.amount
        }
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::balance::total;
    use crate::transaction::{Transaction, TransactionId, TransactionKind};

    fn transaction(id: TransactionId, kind: TransactionKind, amount: rust_decimal::Decimal) -> Transaction {
        Transaction {
            id,
            kind,
            amount,
            date: "2025-09-01T10:30:00Z".to_string(),
            description: "test".to_string(),
            owner: "test".to_string(),
        }
    }

    #[test]
    fn empty_statement_balances_to_zero() {
        assert_eq!(total(&[]), dec!(0));
    }

    #[test]
    fn income_adds_expense_subtracts() {
        let transactions = vec![
            transaction(1, TransactionKind::Income, dec!(2500.50)),
            transaction(2, TransactionKind::Expense, dec!(300.00)),
        ];
        assert_eq!(total(&transactions), dec!(2200.50));
    }

    #[test]
    fn unrecognised_kind_subtracts() {
        let transactions = vec![
            transaction(1, TransactionKind::Income, dec!(100)),
            transaction(2, TransactionKind::Other("transferencia".to_string()), dec!(40)),
        ];
        assert_eq!(total(&transactions), dec!(60));
    }

    #[test]
    fn balance_can_go_negative() {
        let transactions = vec![
            transaction(1, TransactionKind::Income, dec!(300.50)),
            transaction(2, TransactionKind::Expense, dec!(1300.50)),
        ];
        assert_eq!(total(&transactions), dec!(-1000.00));
    }

    #[test]
    fn order_does_not_affect_the_total() {
        let mut transactions = vec![
            transaction(1, TransactionKind::Income, dec!(2500.50)),
            transaction(2, TransactionKind::Expense, dec!(300.00)),
            transaction(3, TransactionKind::Income, dec!(1500.00)),
        ];
        let forward = total(&transactions);
        transactions.reverse();
        assert_eq!(total(&transactions), forward);
    }
}
