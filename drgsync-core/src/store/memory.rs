use crate::{Config, CoreError};
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryConfigStore {
    config: RwLock<Option<Config>>,
    saves: RwLock<usize>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config: RwLock::new(Some(config)),
            saves: RwLock::new(0),
        }
    }

    /// The stored config, `None` until the first load or save.
    pub fn snapshot(&self) -> Option<Config> {
        self.config.read().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.read()
    }
}

impl crate::store::ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Config, CoreError> {
        let mut c = self.config.write();
        Ok(c.get_or_insert_with(Config::default).clone())
    }

    fn save(&self, config: &Config) -> Result<(), CoreError> {
        *self.config.write() = Some(config.clone());
        *self.saves.write() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
