//! Settings read from the environment.

use crate::enums::CommonDenominator;
use crate::error::ConfigError;
use crate::export::DEFAULT_OUTPUT_FILENAME;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

pub const API_KEY_VAR: &str = "STEAM_API_KEY";
pub const API_HOSTNAME_VAR: &str = "STEAM_API_HOSTNAME";
pub const OUTPUT_VAR: &str = "COMMON_GAMES_OUTPUT";
pub const DENOMINATOR_VAR: &str = "COMMON_GAMES_DENOMINATOR";
pub const INCLUDE_FREE_GAMES_VAR: &str = "STEAM_INCLUDE_FREE_GAMES";

/// Everything needed for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Steam Web API key. Required.
    pub api_key: String,
    /// Overrides the Steam Web API base URL.
    pub api_hostname: Option<Url>,
    /// Where the workbook is written.
    pub output: PathBuf,
    /// Which users a game must be owned by to be common.
    pub denominator: CommonDenominator,
    /// Include free games the user has played.
    pub include_played_free_games: bool,
}

impl Config {
    /// Reads the configuration from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        
        Self::from_lookup(|name| std::env::var(name).ok())
    }
    
    /// Reads the configuration using `lookup` to fetch each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let api_hostname = get(API_HOSTNAME_VAR)
            .map(|value| parse_value::<Url>(API_HOSTNAME_VAR, value))
            .transpose()?;
        let output = get(OUTPUT_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME));
        let denominator = get(DENOMINATOR_VAR)
            .map(|value| parse_value::<CommonDenominator>(DENOMINATOR_VAR, value))
            .transpose()?
            .unwrap_or_default();
        let include_played_free_games = get(INCLUDE_FREE_GAMES_VAR)
            .map(|value| parse_bool(INCLUDE_FREE_GAMES_VAR, value))
            .transpose()?
            .unwrap_or(false);
        
        Ok(Self {
            api_key,
            api_hostname,
            output,
            denominator,
            include_played_free_games,
        })
    }
}

fn parse_value<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
{
    value.parse::<T>().map_err(|_e| ConfigError::Invalid { name, value })
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    
    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        
        Config::from_lookup(|name| vars.get(name).cloned())
    }
    
    #[test]
    fn api_key_is_required() {
        assert_eq!(config(&[]), Err(ConfigError::Missing(API_KEY_VAR)));
        assert_eq!(config(&[(API_KEY_VAR, "  ")]), Err(ConfigError::Missing(API_KEY_VAR)));
    }
    
    #[test]
    fn uses_defaults() {
        let config = config(&[(API_KEY_VAR, "ABCDEF")]).unwrap();
        
        assert_eq!(config.api_key, "ABCDEF");
        assert_eq!(config.api_hostname, None);
        assert_eq!(config.output, PathBuf::from("Common_Games.xlsx"));
        assert_eq!(config.denominator, CommonDenominator::AllHandles);
        assert!(!config.include_played_free_games);
    }
    
    #[test]
    fn reads_optional_values() {
        let config = config(&[
            (API_KEY_VAR, "ABCDEF"),
            (API_HOSTNAME_VAR, "http://localhost:8080"),
            (OUTPUT_VAR, "out/report.xlsx"),
            (DENOMINATOR_VAR, "queried"),
            (INCLUDE_FREE_GAMES_VAR, "yes"),
        ]).unwrap();
        
        assert_eq!(config.api_hostname.unwrap().as_str(), "http://localhost:8080/");
        assert_eq!(config.output, PathBuf::from("out/report.xlsx"));
        assert_eq!(config.denominator, CommonDenominator::QueriedHandles);
        assert!(config.include_played_free_games);
    }
    
    #[test]
    fn rejects_invalid_values() {
        let error = config(&[(API_KEY_VAR, "ABCDEF"), (DENOMINATOR_VAR, "most")]).unwrap_err();
        
        assert_eq!(error, ConfigError::Invalid {
            name: DENOMINATOR_VAR,
            value: String::from("most"),
        });
        assert!(config(&[(API_KEY_VAR, "ABCDEF"), (API_HOSTNAME_VAR, "not a url")]).is_err());
        assert!(config(&[(API_KEY_VAR, "ABCDEF"), (INCLUDE_FREE_GAMES_VAR, "maybe")]).is_err());
    }
}
