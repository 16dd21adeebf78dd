use chrono::NaiveDate;

/// One balance-changing event. Immutable once appended to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: i64,
    pub occurred_on: NaiveDate,
    /// Snapshot of the account balance right after this transaction applied.
    pub resulting_balance: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}
