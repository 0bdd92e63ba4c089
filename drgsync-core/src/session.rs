use crate::{
    run_sync, validate_save_path, Config, ConfigStore, CoreError, Direction, MenuChoice, Prompter,
    SyncReport,
};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

const MENU_LABEL: &str = "Select an option";
const XBOX_PROMPT: &str = "Enter path to Xbox save file";
const STEAM_PROMPT: &str = "Enter path to Steam save file";

/// Loaded config plus the collaborators needed to change it or act on it.
pub struct Session<S: ConfigStore, P: Prompter> {
    store: S,
    prompter: P,
    config: Config,
    deadline: Option<Instant>,
}

impl<S: ConfigStore, P: Prompter> Session<S, P> {
    pub fn start(store: S, prompter: P) -> Result<Self, CoreError> {
        let config = store.load()?;
        debug!(location = %store.location(), ?config, "config loaded");
        Ok(Self {
            store,
            prompter,
            config,
            deadline: None,
        })
    }

    /// No new action starts once `deadline` has passed. An action already
    /// under way always runs to completion.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ensure_time_left(&self) -> Result<(), CoreError> {
        match self.deadline {
            Some(d) if Instant::now() >= d => {
                warn!("deadline passed, not starting another action");
                Err(CoreError::DeadlineExceeded)
            }
            _ => Ok(()),
        }
    }

    /// Shows the menu until the user dismisses it, an action fails, or the
    /// deadline passes.
    pub fn run(&mut self) -> Result<(), CoreError> {
        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        loop {
            self.ensure_time_left()?;
            let Some(index) = self.prompter.select(MENU_LABEL, &labels)? else {
                debug!("menu dismissed");
                return Ok(());
            };
            let choice = MenuChoice::from_index(index)
                .ok_or_else(|| CoreError::Prompt(format!("no menu entry at index {index}")))?;
            self.perform(choice)?;
        }
    }

    pub fn perform(&mut self, choice: MenuChoice) -> Result<(), CoreError> {
        self.ensure_time_left()?;
        match choice {
            MenuChoice::Setup => self.setup(),
            MenuChoice::Sync(direction) => self.sync(direction).map(|_| ()),
        }
    }

    /// Asks for both save paths, persists them, and makes them current.
    pub fn setup(&mut self) -> Result<(), CoreError> {
        let xbox = self.prompter.prompt_text(XBOX_PROMPT, &validate_save_path)?;
        debug!(path = %xbox, "xbox save path entered");
        let steam = self.prompter.prompt_text(STEAM_PROMPT, &validate_save_path)?;
        debug!(path = %steam, "steam save path entered");

        let config = Config::new(xbox, steam);
        self.store.save(&config)?;
        info!(location = %self.store.location(), "config saved");
        self.config = config;
        Ok(())
    }

    pub fn sync(&self, direction: Direction) -> Result<SyncReport, CoreError> {
        let (from, to) = direction.endpoints(&self.config);
        let (from_label, to_label) = direction.labels();
        if from.is_empty() {
            return Err(CoreError::NotConfigured(from_label));
        }
        if to.is_empty() {
            return Err(CoreError::NotConfigured(to_label));
        }
        info!(%direction, "syncing save");
        run_sync(Path::new(from), Path::new(to))
    }
}
