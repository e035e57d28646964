//! Collects every user's library and finds the games they have in common.

use crate::api::PlayerLookup;
use crate::enums::{CommonDenominator, LibraryStatus};
use crate::handle::{Handle, HandleKind};
use crate::library::{OwnedGame, UserLibrary};
use std::collections::{HashMap, HashSet};
use steamid_ng::SteamID;

/// Counts how many users own each game, by name.
#[derive(Debug, Default, Clone)]
pub struct GameCounter {
    counts: HashMap<String, usize>,
    /// Names in the order they were first seen.
    order: Vec<String>,
}

impl GameCounter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Adds one user's library. A name listed more than once counts once.
    pub fn add_library(&mut self, games: &[OwnedGame]) {
        let mut seen = HashSet::new();
        
        for game in games {
            if !seen.insert(game.name.as_str()) {
                continue;
            }
            
            match self.counts.get_mut(&game.name) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(game.name.clone(), 1);
                    self.order.push(game.name.clone());
                },
            }
        }
    }
    
    /// The number of users owning a game.
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }
    
    /// The names owned by exactly `users` users, in first-seen order.
    pub fn names_with_count(&self, users: usize) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| self.count(name) == users)
            .cloned()
            .collect()
    }
}

/// A handle along with what was found for it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserResult {
    pub handle: Handle,
    pub library: UserLibrary,
}

/// Everything needed to write the report.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CommonGamesReport {
    /// Users in input order.
    pub users: Vec<UserResult>,
    /// Names of the common games in first-seen order.
    pub common_games: Vec<String>,
}

/// Looks up a single user, stopping at the first failure.
/// 
/// Errors are logged and reduced to a [`LibraryStatus`].
pub async fn lookup_user<L>(lookup: &L, handle: &Handle) -> UserLibrary
where
    L: PlayerLookup,
{
    let Some(steamid) = resolve_handle(lookup, handle).await else {
        return LibraryStatus::UnableToQuery.into();
    };
    
    if !lookup.is_profile_public(steamid).await {
        return LibraryStatus::ProfileNotPublic.into();
    }
    
    match lookup.get_owned_games(steamid).await {
        Ok(games) => games.into(),
        Err(error) => {
            log::warn!("Error fetching owned games for {}: {error}", u64::from(steamid));
            LibraryStatus::NoGamesFound.into()
        },
    }
}

async fn resolve_handle<L>(lookup: &L, handle: &Handle) -> Option<SteamID>
where
    L: PlayerLookup,
{
    match handle.kind() {
        HandleKind::Profile(steamid) => Some(*steamid),
        HandleKind::Vanity(vanity) => match lookup.resolve_vanity_url(vanity).await {
            Ok(steamid) => Some(steamid),
            Err(error) => {
                log::warn!("Error fetching Steam ID for {handle}: {error}");
                None
            },
        },
    }
}

/// Looks up every handle in order and finds the games common to them.
pub async fn find_common_games<L>(
    lookup: &L,
    handles: &[Handle],
    denominator: CommonDenominator,
) -> CommonGamesReport
where
    L: PlayerLookup,
{
    let mut counter = GameCounter::new();
    let mut users = Vec::with_capacity(handles.len());
    
    for handle in handles {
        log::info!("Querying {handle}");
        
        let library = lookup_user(lookup, handle).await;
        
        match &library {
            UserLibrary::Games(games) => {
                log::info!("{handle} owns {} games", games.len());
                counter.add_library(games);
            },
            UserLibrary::Status(status) => {
                log::info!("{handle}: {status}");
            },
        }
        
        users.push(UserResult {
            handle: handle.clone(),
            library,
        });
    }
    
    let common_games = common_game_names(&counter, &users, denominator);
    
    CommonGamesReport {
        users,
        common_games,
    }
}

fn common_game_names(
    counter: &GameCounter,
    users: &[UserResult],
    denominator: CommonDenominator,
) -> Vec<String> {
    let required = match denominator {
        CommonDenominator::AllHandles => users.len(),
        CommonDenominator::QueriedHandles => users
            .iter()
            .filter(|user| user.library.games().is_some())
            .count(),
    };
    
    if required == 0 {
        return Vec::new();
    }
    
    counter.names_with_count(required)
}
