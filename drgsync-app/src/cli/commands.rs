use crate::cli::opts::*;
use crate::prompt::DialoguerPrompter;

use anyhow::{Context, Result};
use drgsync_core::{ConfigStore, MenuChoice, Session};
use drgsync_json::JsonConfigStore;
use std::time::{Duration, Instant};
use tracing::info;

pub fn run_cli(args: Cli) -> Result<()> {
    let store = open_store(&args)?;
    // Checked between actions only; a sync that has started is never cut short.
    let deadline = (args.timeout > 0).then(|| Instant::now() + Duration::from_secs(args.timeout));

    match args.cmd.clone().unwrap_or(Command::Menu) {
        Command::Show => show_cmd(&store),
        Command::Menu => {
            let mut session = start_session(store, deadline)?;
            session.run().context("error with home prompt")
        }
        Command::Setup => {
            let mut session = start_session(store, deadline)?;
            session
                .perform(MenuChoice::Setup)
                .context("error setting up config file")
        }
        Command::Sync { direction } => {
            let session = start_session(store, deadline)?;
            session.ensure_time_left()?;
            let report = session
                .sync(direction.into())
                .context("error syncing save")?;
            println!(
                "backup written to {} ({} bytes), copied {} bytes",
                report.backup_path.display(),
                report.backed_up_bytes,
                report.copied_bytes
            );
            Ok(())
        }
    }
}

fn open_store(args: &Cli) -> Result<JsonConfigStore> {
    match &args.config {
        Some(p) => Ok(JsonConfigStore::open_with(p.clone())),
        None => JsonConfigStore::open_default().context("can't get home dir"),
    }
}

fn start_session(
    store: JsonConfigStore,
    deadline: Option<Instant>,
) -> Result<Session<JsonConfigStore, DialoguerPrompter>> {
    let location = store.location();
    let mut session = Session::start(store, DialoguerPrompter::new())
        .with_context(|| format!("error loading config from {location}"))?;
    if let Some(d) = deadline {
        session = session.with_deadline(d);
    }
    info!(%location, "session started");
    Ok(session)
}

fn show_cmd(store: &JsonConfigStore) -> Result<()> {
    let config = store.load().context("error loading config")?;
    let or_unset = |s: &str| if s.is_empty() { "<not set>".to_string() } else { s.to_string() };
    println!("config\t{}", store.location());
    println!("xbox\t{}", or_unset(&config.xbox_save_path));
    println!("steam\t{}", or_unset(&config.steam_save_path));
    Ok(())
}
