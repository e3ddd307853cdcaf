use crate::error::{Result, SubhubError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberTypeId {
    #[default]
    Basic,
    Business,
}

impl fmt::Display for MemberTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberTypeId::Basic => write!(f, "BASIC"),
            MemberTypeId::Business => write!(f, "BUSINESS"),
        }
    }
}

impl FromStr for MemberTypeId {
    type Err = SubhubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "BASIC" => Ok(MemberTypeId::Basic),
            "BUSINESS" => Ok(MemberTypeId::Business),
            _ => Err(SubhubError::Parse(format!("Invalid member type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_type_id_roundtrip() {
        for id in [MemberTypeId::Basic, MemberTypeId::Business] {
            let parsed: MemberTypeId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_member_type_id_parse_is_case_insensitive() {
        assert_eq!(
            "business".parse::<MemberTypeId>().unwrap(),
            MemberTypeId::Business
        );
    }

    #[test]
    fn test_member_type_id_parse_rejects_unknown() {
        assert!("PREMIUM".parse::<MemberTypeId>().is_err());
    }
}
