use strum_macros::{Display, EnumString};

/// Which users a game must be owned by to count as common.
#[derive(Default, Display, EnumString, Debug, PartialEq, Eq, Clone, Copy)]
#[strum(ascii_case_insensitive)]
pub enum CommonDenominator {
    /// Every input handle, including handles whose lookup failed. A single failed lookup leaves
    /// the common set empty.
    #[default]
    #[strum(serialize = "all")]
    AllHandles,
    /// Only the users whose library was actually fetched.
    #[strum(serialize = "queried")]
    QueriedHandles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    
    #[test]
    fn parses_from_config_value() {
        assert_eq!(CommonDenominator::from_str("all").unwrap(), CommonDenominator::AllHandles);
        assert_eq!(CommonDenominator::from_str("Queried").unwrap(), CommonDenominator::QueriedHandles);
        assert!(CommonDenominator::from_str("some").is_err());
    }
}
