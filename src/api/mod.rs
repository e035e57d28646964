//! Client for the Steam Web API methods used to compare libraries.

mod builder;
mod deserializers;
mod response;

pub use builder::SteamWebAPIBuilder;

use response::{
    Response,
    ResolveVanityURLResponse,
    GetPlayerSummariesResponse,
    GetOwnedGamesResponse,
};
use crate::enums::CommunityVisibilityState;
use crate::error::Error;
use crate::helpers::parses_response;
use crate::library::OwnedGame;
use crate::types::HttpClient;
use std::future::Future;
use serde::Serialize;
use steamid_ng::SteamID;

pub const API_HOSTNAME: &str = "https://api.steampowered.com";

/// The `success` value of a resolved vanity URL.
const RESOLVE_SUCCESS: u32 = 1;

/// The lookups needed for each user. Implemented by [`SteamWebAPI`].
pub trait PlayerLookup: Sync {
    /// Resolves a vanity URL name to a SteamID.
    fn resolve_vanity_url(
        &self,
        vanity: &str,
    ) -> impl Future<Output = Result<SteamID, Error>> + Send;
    
    /// Gets the visibility state of a profile.
    fn get_visibility_state(
        &self,
        steamid: SteamID,
    ) -> impl Future<Output = Result<CommunityVisibilityState, Error>> + Send;
    
    /// Gets the games owned by a user. A profile with hidden game details has no games.
    fn get_owned_games(
        &self,
        steamid: SteamID,
    ) -> impl Future<Output = Result<Vec<OwnedGame>, Error>> + Send;
    
    /// Checks whether a profile is public. Any error counts as not public.
    fn is_profile_public(
        &self,
        steamid: SteamID,
    ) -> impl Future<Output = bool> + Send {
        async move {
            match self.get_visibility_state(steamid).await {
                Ok(state) => state.is_public(),
                Err(error) => {
                    log::warn!("Error checking profile visibility for {}: {error}", u64::from(steamid));
                    false
                },
            }
        }
    }
}

/// Makes requests to the Steam Web API.
#[derive(Debug, Clone)]
pub struct SteamWebAPI {
    client: HttpClient,
    key: String,
    /// Base URL without a trailing slash.
    api_hostname: String,
    include_played_free_games: bool,
}

impl SteamWebAPI {
    /// Builder for constructing a [`SteamWebAPI`].
    pub fn builder(api_key: String) -> SteamWebAPIBuilder {
        SteamWebAPIBuilder::new(api_key)
    }
    
    fn get_api_url(
        &self,
        interface: &str,
        method: &str,
        version: usize,
    ) -> String {
        format!(
            "{}/{}/{}/v{:04}/",
            self.api_hostname,
            interface,
            method,
            version,
        )
    }
    
    /// Resolves a vanity URL name to a SteamID.
    pub async fn resolve_vanity_url(
        &self,
        vanity: &str,
    ) -> Result<SteamID, Error> {
        let request = self.resolve_vanity_url_request(vanity)?;
        let response = self.client.execute(request).await?;
        let body: Response<ResolveVanityURLResponse> = parses_response(response).await?;
        
        from_resolve_vanity_url_response(vanity, body.response)
    }
    
    fn resolve_vanity_url_request(
        &self,
        vanity: &str,
    ) -> Result<reqwest::Request, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            vanityurl: &'a str,
        }
        
        let uri = self.get_api_url("ISteamUser", "ResolveVanityURL", 1);
        log::debug!("get {uri} vanityurl={vanity}");
        let request = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                vanityurl: vanity,
            })
            .build()?;
        
        Ok(request)
    }
    
    /// Gets the visibility state of a profile.
    pub async fn get_visibility_state(
        &self,
        steamid: SteamID,
    ) -> Result<CommunityVisibilityState, Error> {
        let request = self.get_player_summaries_request(steamid)?;
        let response = self.client.execute(request).await?;
        let body: Response<GetPlayerSummariesResponse> = parses_response(response).await?;
        
        from_player_summaries_response(steamid, body.response)
    }
    
    fn get_player_summaries_request(
        &self,
        steamid: SteamID,
    ) -> Result<reqwest::Request, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            steamids: u64,
        }
        
        let uri = self.get_api_url("ISteamUser", "GetPlayerSummaries", 2);
        log::debug!("get {uri} steamids={}", u64::from(steamid));
        let request = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamids: u64::from(steamid),
            })
            .build()?;
        
        Ok(request)
    }
    
    /// Gets the games owned by a user, with app info included.
    pub async fn get_owned_games(
        &self,
        steamid: SteamID,
    ) -> Result<Vec<OwnedGame>, Error> {
        let request = self.get_owned_games_request(steamid)?;
        let response = self.client.execute(request).await?;
        let body: Response<GetOwnedGamesResponse> = parses_response(response).await?;
        
        Ok(from_owned_games_response(body.response))
    }
    
    fn get_owned_games_request(
        &self,
        steamid: SteamID,
    ) -> Result<reqwest::Request, Error> {
        #[derive(Serialize, Debug)]
        struct Form<'a> {
            key: &'a str,
            steamid: u64,
            include_appinfo: u8,
            #[serde(skip_serializing_if = "Option::is_none")]
            include_played_free_games: Option<u8>,
            format: &'static str,
        }
        
        let uri = self.get_api_url("IPlayerService", "GetOwnedGames", 1);
        log::debug!("get {uri} steamid={}", u64::from(steamid));
        let request = self.client.get(&uri)
            .query(&Form {
                key: &self.key,
                steamid: u64::from(steamid),
                include_appinfo: 1,
                include_played_free_games: self.include_played_free_games.then_some(1),
                format: "json",
            })
            .build()?;
        
        Ok(request)
    }
}

impl PlayerLookup for SteamWebAPI {
    async fn resolve_vanity_url(
        &self,
        vanity: &str,
    ) -> Result<SteamID, Error> {
        SteamWebAPI::resolve_vanity_url(self, vanity).await
    }
    
    async fn get_visibility_state(
        &self,
        steamid: SteamID,
    ) -> Result<CommunityVisibilityState, Error> {
        SteamWebAPI::get_visibility_state(self, steamid).await
    }
    
    async fn get_owned_games(
        &self,
        steamid: SteamID,
    ) -> Result<Vec<OwnedGame>, Error> {
        SteamWebAPI::get_owned_games(self, steamid).await
    }
}

fn from_resolve_vanity_url_response(
    vanity: &str,
    response: ResolveVanityURLResponse,
) -> Result<SteamID, Error> {
    match (response.success, response.steamid) {
        (RESOLVE_SUCCESS, Some(steamid)) => Ok(SteamID::from(steamid)),
        (success, _) => Err(Error::VanityNotResolved {
            vanity: vanity.to_string(),
            success,
            message: response.message,
        }),
    }
}

fn from_player_summaries_response(
    steamid: SteamID,
    response: GetPlayerSummariesResponse,
) -> Result<CommunityVisibilityState, Error> {
    let player = response.players
        .into_iter()
        .find(|player| player.steamid.map_or(true, |id| id == u64::from(steamid)))
        .ok_or(Error::PlayerNotFound(steamid))?;
    
    CommunityVisibilityState::try_from(player.communityvisibilitystate)
        .map_err(|_e| Error::UnknownVisibilityState(player.communityvisibilitystate))
}

fn from_owned_games_response(response: GetOwnedGamesResponse) -> Vec<OwnedGame> {
    response.games
        .unwrap_or_default()
        .into_iter()
        .map(|game| OwnedGame::from_minutes(game.appid, game.name, game.playtime_forever))
        .collect()
}
