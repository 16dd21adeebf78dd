use bank_kata::engine::{Account, BankStatement, FixedClock, TransactionLog};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn statement_for_single_deposit() {
    let history = TransactionLog::shared();
    let clock = FixedClock::new(date(2010, 1, 1));
    let mut account = Account::new(history.clone(), Box::new(clock));

    account.deposit(1000);

    let statement = BankStatement::new(history);
    assert_eq!(
        statement.to_string(),
        "Deposited 1000 on 2010-01-01 => balance: 1000\n"
    );
}

#[test]
fn statement_for_multiple_transactions() {
    let history = TransactionLog::shared();
    let clock = FixedClock::sequence(&[date(2010, 1, 1), date(2010, 1, 2), date(2010, 1, 3)]);
    let mut account = Account::new(history.clone(), Box::new(clock));

    account.deposit(1000);
    account.deposit(2000);
    account.withdraw(500);

    assert_eq!(account.balance(), 2500);

    let statement = BankStatement::new(history);
    assert_eq!(
        statement.to_string(),
        "Deposited 1000 on 2010-01-01 => balance: 1000\n\
         Deposited 2000 on 2010-01-02 => balance: 3000\n\
         Withdrew 500 on 2010-01-03 => balance: 2500\n"
    );
}

#[test]
fn statement_for_overdrawn_account() {
    let history = TransactionLog::shared();
    let clock = FixedClock::new(date(2010, 1, 1));
    let mut account = Account::new(history.clone(), Box::new(clock));

    account.withdraw(1000);

    let statement = BankStatement::new(history);
    assert_eq!(
        statement.to_string(),
        "Withdrew 1000 on 2010-01-01 => balance: -1000\n"
    );
}

#[test]
fn statement_for_empty_history_is_empty() {
    let statement = BankStatement::new(TransactionLog::shared());
    assert_eq!(statement.to_string(), "");
}

#[test]
fn balance_is_initial_plus_deposits_minus_withdrawals() {
    let history = TransactionLog::shared();
    let clock = FixedClock::new(date(2010, 6, 15));
    let mut account = Account::with_balance(history.clone(), Box::new(clock), 100);

    account.deposit(40);
    account.withdraw(25);
    account.deposit(10);
    account.withdraw(5);

    assert_eq!(account.balance(), 100 + 40 - 25 + 10 - 5);
    assert_eq!(history.borrow().len(), 4);
}

#[test]
fn every_call_appends_exactly_one_transaction() {
    let history = TransactionLog::shared();
    let clock = FixedClock::new(date(2010, 1, 1));
    let mut account = Account::new(history.clone(), Box::new(clock));

    for i in 1..=5 {
        account.deposit(i);
        assert_eq!(history.borrow().len(), i as usize);
    }
}
