//! Raw response bodies from the Steam Web API.

use super::deserializers::option_str_to_number;
use crate::types::{AppId, Minutes};
use serde::Deserialize;

/// Every Steam Web API method wraps its body in a `response` key.
#[derive(Deserialize, Debug)]
pub struct Response<T> {
    pub response: T,
}

#[derive(Deserialize, Debug)]
pub struct ResolveVanityURLResponse {
    /// 1 on success. 42 when there is no match.
    pub success: u32,
    #[serde(default)]
    #[serde(deserialize_with = "option_str_to_number")]
    pub steamid: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct GetPlayerSummariesResponse {
    pub players: Vec<RawPlayerSummary>,
}

#[derive(Deserialize, Debug)]
pub struct RawPlayerSummary {
    #[serde(default)]
    #[serde(deserialize_with = "option_str_to_number")]
    pub steamid: Option<u64>,
    pub communityvisibilitystate: u8,
}

#[derive(Deserialize, Debug)]
pub struct GetOwnedGamesResponse {
    /// Missing when the profile hides its game details or owns nothing.
    #[serde(default)]
    pub games: Option<Vec<RawOwnedGame>>,
}

#[derive(Deserialize, Debug)]
pub struct RawOwnedGame {
    pub appid: AppId,
    pub name: String,
    pub playtime_forever: Minutes,
}
