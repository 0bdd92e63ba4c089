use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use drgsync_core::Direction;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    XboxToSteam,
    SteamToXbox,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::XboxToSteam => Direction::XboxToSteam,
            DirectionArg::SteamToXbox => Direction::SteamToXbox,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(name = "drgsync", version, about = "Copy Deep Rock Galactic saves between Xbox and Steam")]
pub struct Cli {
    /// Config file (defaults to ~/.deepRockSyncConfig)
    #[arg(long, env = "DRG_SYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start no new action after this many seconds (0 disables the deadline)
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// Enter and save both save-file paths
    Setup,
    /// Back up the destination and copy the source save over it
    Sync {
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Print the config location and configured paths
    Show,
}
