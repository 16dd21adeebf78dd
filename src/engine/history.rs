use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::Transaction;

/// Ordered, append-only transaction history. Insertion order is the
/// chronological order of operations.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

/// Handle shared between the account (single writer, append-only) and the
/// statement (reader). Single-threaded, so RefCell is enough.
pub type SharedLog = Rc<RefCell<TransactionLog>>;

impl TransactionLog {
    pub fn new() -> Self {
        TransactionLog {
            entries: Vec::new(),
        }
    }

    pub fn shared() -> SharedLog {
        Rc::new(RefCell::new(TransactionLog::new()))
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
