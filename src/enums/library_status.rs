use strum_macros::{Display, EnumString};

/// Why a user has no games listed. The display strings are written into the spreadsheet as-is.
#[derive(Display, EnumString, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LibraryStatus {
    /// The handle could not be resolved to a SteamID.
    #[strum(serialize = "Unable to query")]
    UnableToQuery,
    /// The profile is public but no games were returned.
    #[strum(serialize = "No games found")]
    NoGamesFound,
    /// The profile is not public.
    #[strum(serialize = "Profile not public")]
    ProfileNotPublic,
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn displays_fixed_strings() {
        assert_eq!(LibraryStatus::UnableToQuery.to_string(), "Unable to query");
        assert_eq!(LibraryStatus::NoGamesFound.to_string(), "No games found");
        assert_eq!(LibraryStatus::ProfileNotPublic.to_string(), "Profile not public");
    }
}
