use crate::{Config, CoreError};

pub mod memory;

/// Persistence for the single [`Config`] record.
pub trait ConfigStore {
    /// Reads the config, creating an empty one first if none exists yet.
    fn load(&self) -> Result<Config, CoreError>;

    /// Replaces the stored config wholesale.
    fn save(&self, config: &Config) -> Result<(), CoreError>;

    /// Human readable location of the backing storage.
    fn location(&self) -> String;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn load(&self) -> Result<Config, CoreError> {
        (**self).load()
    }

    fn save(&self, config: &Config) -> Result<(), CoreError> {
        (**self).save(config)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
