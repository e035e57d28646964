//! Owned games and per-user results.

use crate::enums::LibraryStatus;
use crate::types::{AppId, Hours, Minutes};

const MINUTES_PER_HOUR: Minutes = 60;

/// A game in a user's library.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OwnedGame {
    /// The app ID of the game.
    pub appid: AppId,
    /// The name of the game.
    pub name: String,
    /// Total playtime in whole hours, rounded down.
    pub playtime_hours: Hours,
}

impl OwnedGame {
    /// Creates an [`OwnedGame`] from a playtime in minutes.
    pub fn from_minutes(appid: AppId, name: String, playtime_minutes: Minutes) -> Self {
        Self {
            appid,
            name,
            playtime_hours: playtime_minutes / MINUTES_PER_HOUR,
        }
    }
}

/// The result of looking up a single user.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum UserLibrary {
    /// The user's games. Never empty.
    Games(Vec<OwnedGame>),
    /// The lookup stopped early.
    Status(LibraryStatus),
}

impl UserLibrary {
    /// The games, if any were fetched.
    pub fn games(&self) -> Option<&[OwnedGame]> {
        match self {
            Self::Games(games) => Some(games.as_slice()),
            Self::Status(_) => None,
        }
    }
    
    /// The status, if the lookup stopped early.
    pub fn status(&self) -> Option<LibraryStatus> {
        match self {
            Self::Games(_) => None,
            Self::Status(status) => Some(*status),
        }
    }
    
    /// Number of rows this library occupies in the report.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Games(games) => games.len(),
            Self::Status(_) => 1,
        }
    }
}

impl From<Vec<OwnedGame>> for UserLibrary {
    fn from(games: Vec<OwnedGame>) -> Self {
        if games.is_empty() {
            Self::Status(LibraryStatus::NoGamesFound)
        } else {
            Self::Games(games)
        }
    }
}

impl From<LibraryStatus> for UserLibrary {
    fn from(status: LibraryStatus) -> Self {
        Self::Status(status)
    }
}
