//! Finds the games a group of Steam users have in common.
//! 
//! Each handle is resolved to a SteamID, checked for a public profile, and its owned games are
//! fetched from the Steam Web API. The games owned by everyone are reported alongside each
//! user's library in a spreadsheet.

pub mod aggregate;
pub mod api;
pub mod config;
pub mod enums;
pub mod error;
pub mod export;
pub mod handle;
pub mod library;
pub mod types;

mod helpers;

pub use aggregate::{find_common_games, lookup_user, CommonGamesReport, GameCounter, UserResult};
pub use api::{PlayerLookup, SteamWebAPI, SteamWebAPIBuilder};
pub use config::Config;
pub use error::{ConfigError, Error};
pub use export::{write_workbook, GamesTable};
pub use handle::{parse_handles, Handle, HandleKind};
pub use library::{OwnedGame, UserLibrary};
pub use steamid_ng::SteamID;
