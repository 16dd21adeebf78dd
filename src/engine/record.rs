use serde::Deserialize;
use thiserror::Error;

use crate::engine::Account;

/// One CSV row of the demo driver: `type,amount`.
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: RecordType,
    pub amount: Option<i64>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Deposit,
    Withdrawal,
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record has no amount")]
    MissingAmount,
}

impl InputRecord {
    pub fn apply_to(&self, account: &mut Account) -> Result<(), RecordError> {
        let amount = self.amount.ok_or(RecordError::MissingAmount)?;
        match self.typ {
            RecordType::Deposit => account.deposit(amount),
            RecordType::Withdrawal => account.withdraw(amount),
        }
        Ok(())
    }
}
