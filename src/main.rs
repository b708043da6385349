//! Address Book - demonstration entry point
//!
//! Builds a small sample book, exercises the record operations and prints
//! the upcoming birthdays report to stdout. Logs go to stderr.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = match sample_book() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to build sample book: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", book);

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
        println!("{}", john);

        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    book.delete("Jane");

    let today = config.today_or_local();
    info!(
        "Upcoming birthdays from {} for {} days",
        today, config.window_days
    );

    let report = book.upcoming_birthdays(today, config.window_days);
    match config.output {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn sample_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    john.add_birthday("12.3.2000").context("John's birthday")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    jane.add_birthday("15.4.1990").context("Jane's birthday")?;
    book.add_record(jane);

    let mut sam = Record::new("Sam")?;
    sam.add_phone("0501234567")?;
    sam.add_birthday("16.03.1995").context("Sam's birthday")?;
    book.add_record(sam);

    Ok(book)
}
