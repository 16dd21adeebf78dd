use anyhow::{bail, Result};
use bank_kata::engine::{Account, BankStatement, InputRecord, SystemClock, TransactionLog};
use csv::Trim;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::{env, ffi::OsString, fs::File, rc::Rc};

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    log::debug!("Building statement: Starting");
    let statement = build_statement()?;
    log::debug!("Building statement: Done");

    print!("{statement}");

    log::debug!("Application finished");

    Ok(())
}

fn get_first_arg() -> Result<OsString> {
    match env::args_os().nth(1) {
        None => bail!("expected 1 argument, but got none"),
        Some(file_path) => Ok(file_path),
    }
}

fn build_statement() -> Result<String> {
    let file_path = get_first_arg()?;
    let path = PathBuf::from(file_path);
    log::debug!("Extracted filepath from args: {path:?}");

    build_statement_from_filepath(&path)
}

fn build_statement_from_filepath(filepath: &PathBuf) -> Result<String> {
    let file: File = File::open(filepath)?;

    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let history = TransactionLog::shared();
    let mut account = Account::new(Rc::clone(&history), Box::new(SystemClock));

    log::debug!("Started deserialising records");
    for result in rdr.deserialize::<InputRecord>() {
        log::debug!("Deserialising record into InputRecord: {result:?}");
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Error deserializing record:{e}");
                continue;
            }
        };
        log::debug!("Applying record to account: {record:?}");
        if let Err(e) = record.apply_to(&mut account) {
            log::warn!("Error applying record {record:?}: {e}");
        }
    }

    Ok(BankStatement::new(history).to_string())
}
