use super::{SteamWebAPI, API_HOSTNAME};
use crate::error::Error;
use crate::helpers::{get_default_middleware, USER_AGENT_STRING};
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

/// Builder for constructing a [`SteamWebAPI`].
#[derive(Debug, Clone)]
pub struct SteamWebAPIBuilder {
    /// Your account's API key from <https://steamcommunity.com/dev/apikey>.
    pub(crate) api_key: String,
    /// Base URL of the Steam Web API.
    pub(crate) api_hostname: Option<Url>,
    /// Whether to include free games the user has played when getting owned games.
    pub(crate) include_played_free_games: bool,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// User agent for requests.
    pub(crate) user_agent: &'static str,
}

impl SteamWebAPIBuilder {
    /// Creates a new [`SteamWebAPIBuilder`].
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_hostname: None,
            include_played_free_games: false,
            client: None,
            user_agent: USER_AGENT_STRING,
        }
    }
    
    /// The base URL of the Steam Web API. Defaults to <https://api.steampowered.com>.
    pub fn api_hostname(mut self, api_hostname: Url) -> Self {
        self.api_hostname = Some(api_hostname);
        self
    }
    
    /// Include free games the user has played when getting owned games. Off by default.
    pub fn include_played_free_games(mut self, include_played_free_games: bool) -> Self {
        self.include_played_free_games = include_played_free_games;
        self
    }
    
    /// The user agent for requests. Ignored if a client is supplied.
    pub fn user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }
    
    /// Client to use for requests.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }
    
    /// Builds the [`SteamWebAPI`].
    pub fn build(self) -> Result<SteamWebAPI, Error> {
        let client = match self.client {
            Some(client) => client,
            None => get_default_middleware(self.user_agent)?,
        };
        let api_hostname = match self.api_hostname {
            Some(api_hostname) => api_hostname.as_str().trim_end_matches('/').to_string(),
            None => API_HOSTNAME.to_string(),
        };
        
        Ok(SteamWebAPI {
            client,
            key: self.api_key,
            api_hostname,
            include_played_free_games: self.include_played_free_games,
        })
    }
}
