//! Error types.

use steamid_ng::SteamID;

/// Any number of errors that can occur while collecting libraries or writing the report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error was encountered making a request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error was encountered within the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// An error was encountered parsing a JSON response body.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// An HTTP error status was returned.
    #[error("Error {}", .0)]
    Http(reqwest::StatusCode),
    /// The vanity URL did not resolve to a SteamID.
    #[error("Unable to resolve vanity URL {vanity} (success {success}){}", format_message(.message))]
    VanityNotResolved {
        /// The vanity URL that was looked up.
        vanity: String,
        /// The `success` code Steam returned.
        success: u32,
        /// The message Steam returned, if any.
        message: Option<String>,
    },
    /// No player summary was returned for the SteamID.
    #[error("No player summary for {}", steamid64(.0))]
    PlayerNotFound(SteamID),
    /// The player summary has a visibility state that isn't known.
    #[error("Unknown community visibility state {}", .0)]
    UnknownVisibilityState(u8),
    /// The configuration is invalid.
    #[error("{}", .0)]
    Config(#[from] ConfigError),
    /// No handles were given.
    #[error("No handles were given")]
    NoHandles,
    /// An I/O error.
    #[error("I/O error: {}", .0)]
    Io(#[from] std::io::Error),
    /// The workbook could not be written.
    #[error("Error writing workbook: {}", .0)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

fn format_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(": {message}"),
        None => String::new(),
    }
}

fn steamid64(steamid: &SteamID) -> u64 {
    u64::from(*steamid)
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An error with a configuration value.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("{} must be set", .0)]
    Missing(&'static str),
    /// A variable is set to something that could not be understood.
    #[error("Invalid value for {name}: {value:?}")]
    Invalid {
        /// The name of the variable.
        name: &'static str,
        /// The value it was set to.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn displays_vanity_not_resolved() {
        let error = Error::VanityNotResolved {
            vanity: String::from("nobody"),
            success: 42,
            message: Some(String::from("No match")),
        };
        
        assert_eq!(error.to_string(), "Unable to resolve vanity URL nobody (success 42): No match");
    }
    
    #[test]
    fn displays_missing_config() {
        let error = Error::from(ConfigError::Missing("STEAM_API_KEY"));
        
        assert_eq!(error.to_string(), "STEAM_API_KEY must be set");
    }
}
