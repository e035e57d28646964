//! User-supplied handles.

use std::collections::HashSet;
use std::fmt;
use steamid_ng::SteamID;
use url::Url;

const COMMUNITY_HOSTNAME: &str = "steamcommunity.com";

/// What a handle refers to.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum HandleKind {
    /// A vanity URL name which still needs to be resolved.
    Vanity(String),
    /// A profile URL which already contains the SteamID.
    Profile(SteamID),
}

/// A handle as typed by the user. The original text is kept for display.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Handle {
    text: String,
    kind: HandleKind,
}

impl Handle {
    /// Parses a handle. Returns `None` if the input is blank.
    /// 
    /// Accepts a vanity name (`gabelogannewell`), a vanity URL
    /// (`https://steamcommunity.com/id/gabelogannewell/`) or a profile URL
    /// (`https://steamcommunity.com/profiles/76561197960287930`).
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        
        if text.is_empty() {
            return None;
        }
        
        let kind = parse_community_url(text)
            .unwrap_or_else(|| HandleKind::Vanity(text.to_string()));
        
        Some(Self {
            text: text.to_string(),
            kind,
        })
    }
    
    /// A handle for a vanity name, used as-is.
    pub fn vanity(vanity: &str) -> Self {
        Self {
            text: vanity.to_string(),
            kind: HandleKind::Vanity(vanity.to_string()),
        }
    }
    
    /// The handle as it was typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }
    
    /// What the handle refers to.
    pub fn kind(&self) -> &HandleKind {
        &self.kind
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Splits a comma-separated line into handles. Blank entries and repeated handles are dropped,
/// keeping the first occurrence.
pub fn parse_handles(line: &str) -> Vec<Handle> {
    let mut seen = HashSet::new();
    
    line
        .split(',')
        .filter_map(Handle::parse)
        .filter(|handle| seen.insert(handle.text.clone()))
        .collect()
}

fn parse_community_url(text: &str) -> Option<HandleKind> {
    let url = if text.starts_with(COMMUNITY_HOSTNAME) || text.starts_with("www.") {
        Url::parse(&format!("https://{text}")).ok()?
    } else {
        Url::parse(text).ok()?
    };
    let host = url.host_str()?;
    
    if host != COMMUNITY_HOSTNAME && host != "www.steamcommunity.com" {
        return None;
    }
    
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());
    
    match (segments.next(), segments.next()) {
        (Some("id"), Some(vanity)) => Some(HandleKind::Vanity(vanity.to_string())),
        (Some("profiles"), Some(steamid)) => {
            let steamid = steamid.parse::<u64>().ok()?;
            
            Some(HandleKind::Profile(SteamID::from(steamid)))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn parses_plain_vanity() {
        let handle = Handle::parse("  gaben ").unwrap();
        
        assert_eq!(handle.as_str(), "gaben");
        assert_eq!(handle.kind(), &HandleKind::Vanity(String::from("gaben")));
    }
    
    #[test]
    fn parses_vanity_url() {
        let handle = Handle::parse("https://steamcommunity.com/id/gaben/").unwrap();
        
        assert_eq!(handle.as_str(), "https://steamcommunity.com/id/gaben/");
        assert_eq!(handle.kind(), &HandleKind::Vanity(String::from("gaben")));
    }
    
    #[test]
    fn parses_profile_url_without_scheme() {
        let handle = Handle::parse("steamcommunity.com/profiles/76561197960287930").unwrap();
        
        assert_eq!(handle.kind(), &HandleKind::Profile(SteamID::from(76561197960287930)));
    }
    
    #[test]
    fn other_urls_are_vanity_names() {
        let handle = Handle::parse("https://example.com/id/gaben").unwrap();
        
        assert_eq!(handle.kind(), &HandleKind::Vanity(String::from("https://example.com/id/gaben")));
    }
    
    #[test]
    fn blank_is_none() {
        assert!(Handle::parse("   ").is_none());
    }
    
    #[test]
    fn splits_handles() {
        let handles = parse_handles("alice, bob,,alice , carol,");
        let names = handles.iter().map(Handle::as_str).collect::<Vec<_>>();
        
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }
}
