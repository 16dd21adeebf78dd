use std::fmt;

use crate::engine::{SharedLog, TransactionKind};

/// Renders a transaction log as text, one line per transaction in log
/// order. Reading never mutates the log; an empty log renders as the
/// empty string.
pub struct BankStatement {
    log: SharedLog,
}

impl BankStatement {
    pub fn new(log: SharedLog) -> Self {
        BankStatement { log }
    }
}

impl fmt::Display for BankStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for transaction in self.log.borrow().entries() {
            let verb = match transaction.kind {
                TransactionKind::Deposit => "Deposited",
                TransactionKind::Withdraw => "Withdrew",
            };
            writeln!(
                f,
                "{verb} {} on {} => balance: {}",
                transaction.amount, transaction.occurred_on, transaction.resulting_balance
            )?;
        }
        Ok(())
    }
}
