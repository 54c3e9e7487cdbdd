use std::fmt;

use serde::{Deserialize, Serialize};

use super::ZoneError;

/// Identifier of a persisted zone (always a positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ZoneId(i64);

impl ZoneId {
    pub fn new(value: i64) -> Result<Self, ZoneError> {
        if value <= 0 {
            return Err(ZoneError::InvalidId(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ZoneId {
    type Error = ZoneError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoneId> for i64 {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ids_are_accepted() {
        let id = ZoneId::new(7).unwrap();
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_zero_and_negative_ids_are_rejected() {
        assert!(matches!(ZoneId::new(0), Err(ZoneError::InvalidId(0))));
        assert!(matches!(ZoneId::try_from(-3), Err(ZoneError::InvalidId(-3))));
    }

    #[test]
    fn test_serde_is_transparent_and_validated() {
        let id: ZoneId = serde_json::from_str("12").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        assert!(serde_json::from_str::<ZoneId>("0").is_err());
    }
}
