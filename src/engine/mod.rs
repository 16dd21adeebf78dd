mod account;
mod clock;
mod history;
mod record;
mod statement;
mod transaction;

pub use account::Account;
pub use clock::{Clock, FixedClock, SystemClock};
pub use history::{SharedLog, TransactionLog};
pub use record::{InputRecord, RecordError, RecordType};
pub use statement::BankStatement;
pub use transaction::{Transaction, TransactionKind};
