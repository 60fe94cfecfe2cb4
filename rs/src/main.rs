use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use rowstore::cli::{Cli, Command};
use rowstore::config::Config;
use rowstore::{PageQuery, RowStore};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

/// Print a failure message and exit nonzero so the binary is scriptable
fn fail(message: String) -> ! {
    eprintln!("{} {}", "✗".red(), message);
    std::process::exit(1);
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("rowstore starting");

    let store = RowStore::new(config);

    match cli.command {
        Command::Add { key, row } => match store.create(&key, &row) {
            Ok(()) => println!("{} Row added to {}", "✓".green(), key.cyan()),
            Err(err) => fail(format!("Failed to add the row: {}", err)),
        },
        Command::Get {
            key,
            page,
            quantity,
            asc,
        } => {
            let result = store.paginated_rows(&key, &PageQuery { quantity, asc, page });
            println!("Total rows: {}", result.total);
            for (number, row) in result.rows.iter().enumerate() {
                println!("{}. {}", number + 1, row);
            }
        }
        Command::GetIndex { key, index } => match store.row_at(&key, index) {
            Some(row) => println!("Row {}: {}", index, row),
            None => fail(format!("No row found at index {}", index)),
        },
        Command::DeleteByTerm { key, term } => match store.delete_by_term(&key, &term) {
            Ok(()) => println!("{} Row deleted from {}", "✓".green(), key.cyan()),
            Err(err) => fail(format!("Could not delete a row matching '{}': {}", term, err)),
        },
        Command::DeleteByIndex { key, index } => match store.delete_by_index(&key, index) {
            Ok(()) => println!("{} Row {} deleted from {}", "✓".green(), index, key.cyan()),
            Err(err) => fail(format!("Could not delete row {}: {}", index, err)),
        },
        Command::UpdateByIndex { key, index, row } => match store.update_by_index(&key, index, &row) {
            Ok(()) => println!("{} Row {} updated in {}", "✓".green(), index, key.cyan()),
            Err(err) => fail(format!("Could not update row {}: {}", index, err)),
        },
        Command::UpdateByTerm { key, term, row } => match store.update_by_term(&key, &term, &row) {
            Ok(()) => println!("{} Row updated in {}", "✓".green(), key.cyan()),
            Err(err) => fail(format!("Could not update a row matching '{}': {}", term, err)),
        },
    }

    Ok(())
}
