//! Enumerated types.

mod common_denominator;
mod community_visibility_state;
mod library_status;

pub use common_denominator::CommonDenominator;
pub use community_visibility_state::CommunityVisibilityState;
pub use library_status::LibraryStatus;
