use crate::engine::{Clock, SharedLog, Transaction, TransactionKind};

/// Maintains a running balance and records every balance-changing operation
/// into a shared transaction log it does not own.
pub struct Account {
    balance: i64,
    log: SharedLog,
    clock: Box<dyn Clock>,
}

impl Account {
    pub fn new(log: SharedLog, clock: Box<dyn Clock>) -> Self {
        Account::with_balance(log, clock, 0)
    }

    pub fn with_balance(log: SharedLog, clock: Box<dyn Clock>, balance: i64) -> Self {
        Account {
            balance,
            log,
            clock,
        }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// No sign validation: a negative amount simply reduces the balance.
    pub fn deposit(&mut self, amount: i64) {
        self.balance += amount;
        self.record(TransactionKind::Deposit, amount);
    }

    /// No overdraft check: the balance may go negative.
    pub fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;
        self.record(TransactionKind::Withdraw, amount);
    }

    fn record(&mut self, kind: TransactionKind, amount: i64) {
        let transaction = Transaction {
            kind,
            amount,
            occurred_on: self.clock.today(),
            resulting_balance: self.balance,
        };
        log::debug!("Appending transaction to log: {transaction:?}");
        self.log.borrow_mut().append(transaction);
    }
}
