use anyhow::{Context, Result};
use log::info;

use probe_target::Record;

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Fixture values from the command line, or the stock Alice/30 pair.
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Alice".to_string());
    let age = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid age argument: {raw}"))?,
        None => 30,
    };

    // Exercise each operation once so an attached inspector has something to
    // observe. Only print_info writes to stdout; the rest go to the log.
    let mut record = Record::new(name, age);
    record.print_info();

    info!("square(5) = {}", Record::square(5));
    info!("divide(3) = {}", record.divide(3)?);
    match record.divide(0) {
        Ok(quotient) => info!("divide(0) = {quotient}"),
        Err(e) => info!("divide(0) failed: {e}"),
    }

    Ok(())
}
