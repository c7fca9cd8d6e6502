//! Comparison operators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use xivapi_core::XivError;

/// A comparison operator between a field and a value.
///
/// The set is closed: the service understands exactly these six tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equality (`=`).
    #[serde(rename = "=")]
    Eq,
    /// Partial string match (`~`).
    #[serde(rename = "~")]
    Contains,
    /// Greater than (`>`).
    #[serde(rename = ">")]
    Gt,
    /// Less than (`<`).
    #[serde(rename = "<")]
    Lt,
    /// Greater than or equal (`>=`).
    #[serde(rename = ">=")]
    Gte,
    /// Less than or equal (`<=`).
    #[serde(rename = "<=")]
    Lte,
}

impl Operator {
    /// Every supported operator.
    pub const ALL: [Self; 6] = [
        Self::Eq,
        Self::Contains,
        Self::Gt,
        Self::Lt,
        Self::Gte,
        Self::Lte,
    ];

    /// Returns the operator's token in the query grammar.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Contains => "~",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = XivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| XivError::Parameter(format!("unsupported operator '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        let tokens: Vec<&str> = Operator::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(tokens, ["=", "~", ">", "<", ">=", "<="]);
    }

    #[test]
    fn test_parse_every_token() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["==", "!=", "", " =", "like"] {
            let err = bad.parse::<Operator>().unwrap_err();
            assert!(matches!(err, XivError::Parameter(_)), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_serde_uses_tokens() {
        assert_eq!(serde_json::to_string(&Operator::Gte).unwrap(), "\">=\"");
        let op: Operator = serde_json::from_str("\"~\"").unwrap();
        assert_eq!(op, Operator::Contains);
    }
}
