use std::io::{self, Write};
use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::logging;
use crate::io::persist;
use crate::io::store::{FileStore, MemoryStore, Store};
use crate::model::Config;
use crate::tui::{self, app::App, app::Route};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config_io::default_config_path);
    let config = config_io::read_config(&config_path)?;
    let data_dir = config_io::resolve_data_dir(cli.data_dir.as_deref(), &config);

    match cli.command {
        None => cmd_app(&config, &data_dir, cli.ephemeral, Route::Landing),
        Some(Commands::App) => cmd_app(&config, &data_dir, cli.ephemeral, Route::Panel),
        Some(Commands::Tasks(args)) => {
            let store = open_store(&data_dir, cli.ephemeral)?;
            cmd_tasks(store.as_ref(), args.json)
        }
        Some(Commands::Notes) => {
            let store = open_store(&data_dir, cli.ephemeral)?;
            cmd_notes(store.as_ref())
        }
    }
}

fn open_store(data_dir: &Path, ephemeral: bool) -> Result<Box<dyn Store>, Box<dyn std::error::Error>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }
    Ok(Box::new(FileStore::open(data_dir)?))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_app(
    config: &Config,
    data_dir: &Path,
    ephemeral: bool,
    route: Route,
) -> Result<(), Box<dyn std::error::Error>> {
    if !ephemeral {
        logging::init(data_dir, config.log.filter.as_deref())
            .map_err(|e| format!("cannot open log in {}: {}", data_dir.display(), e))?;
    }
    tracing::info!(data_dir = %data_dir.display(), ephemeral, ?route, "starting");

    let store = open_store(data_dir, ephemeral)?;
    let app = App::new(store, &config.ui).with_route(route);
    tui::run(app)
}

/// Print the stored task list. A corrupt `fh_tasks` is an error here, not
/// an empty list: the user asked to see exactly what is stored.
fn cmd_tasks(store: &dyn Store, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = persist::load_tasks(store)?.unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        write_tasks_json(&mut out, &tasks)?;
    } else if tasks.is_empty() {
        writeln!(out, "No tasks yet.")?;
    } else {
        write_tasks(&mut out, &tasks)?;
        writeln!(out, "{}", format_remaining(&tasks))?;
    }
    Ok(())
}

fn cmd_notes(store: &dyn Store) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(notes) = persist::load_notes(store)? {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(notes.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}
