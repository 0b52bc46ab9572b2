mod analytics;
mod config;
mod db;
mod forms;
mod logging;
mod models;
mod run;
mod storage;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    logging::init(&config.log_path)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");

    let db = db::Database::open(&config.db_path)?;
    let mut storage = storage::Storage::new(db);

    match args.len() {
        1 => run::as_tui(&mut storage),
        2.. => run::as_cli(&args, &mut storage),
        _ => {
            eprintln!("Usage: bunnybudget [command]");
            Ok(())
        }
    }
}
