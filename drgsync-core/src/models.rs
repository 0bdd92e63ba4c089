use serde::{Deserialize, Serialize};
use std::fmt;

/// The two save locations the tool copies between.
///
/// Older config files spelled the keys in camelCase or PascalCase; those are
/// accepted on read and the snake_case form is always written back.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StoredConfig")]
pub struct Config {
    pub xbox_save_path: String,
    pub steam_save_path: String,
}

/// Every key spelling seen on disk. The snake_case key wins when several are
/// present; missing and `null` values read as empty.
#[derive(Deserialize)]
struct StoredConfig {
    xbox_save_path: Option<String>,
    #[serde(rename = "xboxSavePath")]
    xbox_camel: Option<String>,
    #[serde(rename = "XboxSavePath")]
    xbox_pascal: Option<String>,
    steam_save_path: Option<String>,
    #[serde(rename = "steamSavePath")]
    steam_camel: Option<String>,
    #[serde(rename = "SteamSavePath")]
    steam_pascal: Option<String>,
}

impl From<StoredConfig> for Config {
    fn from(s: StoredConfig) -> Self {
        Self {
            xbox_save_path: s
                .xbox_save_path
                .or(s.xbox_camel)
                .or(s.xbox_pascal)
                .unwrap_or_default(),
            steam_save_path: s
                .steam_save_path
                .or(s.steam_camel)
                .or(s.steam_pascal)
                .unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn new(xbox_save_path: impl Into<String>, steam_save_path: impl Into<String>) -> Self {
        Self {
            xbox_save_path: xbox_save_path.into(),
            steam_save_path: steam_save_path.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.xbox_save_path.is_empty() && !self.steam_save_path.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    XboxToSteam,
    SteamToXbox,
}

impl Direction {
    /// `(source, destination)` for this direction.
    pub fn endpoints<'a>(&self, config: &'a Config) -> (&'a str, &'a str) {
        match self {
            Direction::XboxToSteam => (&config.xbox_save_path, &config.steam_save_path),
            Direction::SteamToXbox => (&config.steam_save_path, &config.xbox_save_path),
        }
    }

    /// Platform names as `(source, destination)`.
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Direction::XboxToSteam => ("xbox", "steam"),
            Direction::SteamToXbox => ("steam", "xbox"),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.labels();
        write!(f, "{from} -> {to}")
    }
}

/// Entries of the main menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Setup,
    Sync(Direction),
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::Setup,
        MenuChoice::Sync(Direction::XboxToSteam),
        MenuChoice::Sync(Direction::SteamToXbox),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Setup => "Set up",
            MenuChoice::Sync(Direction::XboxToSteam) => "Sync Xbox to Steam",
            MenuChoice::Sync(Direction::SteamToXbox) => "Sync Steam to Xbox",
        }
    }

    pub fn from_index(i: usize) -> Option<MenuChoice> {
        Self::ALL.get(i).copied()
    }
}
