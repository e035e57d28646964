use num_enum::{TryFromPrimitive, IntoPrimitive};
use strum_macros::Display;

/// The `communityvisibilitystate` of a player summary.
#[derive(Display, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[repr(u8)]
pub enum CommunityVisibilityState {
    /// Only the owner can see the profile.
    Private = 1,
    /// Only friends can see the profile.
    FriendsOnly = 2,
    /// Anyone can see the profile. This is the only state where a library can be read.
    Public = 3,
}

impl CommunityVisibilityState {
    /// Whether the profile can be queried by anyone.
    pub fn is_public(&self) -> bool {
        *self == Self::Public
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn converts_from_code() {
        assert_eq!(CommunityVisibilityState::try_from(3u8).unwrap(), CommunityVisibilityState::Public);
        assert_eq!(CommunityVisibilityState::try_from(1u8).unwrap(), CommunityVisibilityState::Private);
        assert!(CommunityVisibilityState::try_from(9u8).is_err());
    }
    
    #[test]
    fn only_public_is_public() {
        assert!(CommunityVisibilityState::Public.is_public());
        assert!(!CommunityVisibilityState::FriendsOnly.is_public());
        assert!(!CommunityVisibilityState::Private.is_public());
    }
}
