//! Player strategy labels

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// The two strategies the simulators evaluate
///
/// # Example
/// ```
/// use montyq_core::Strategy;
///
/// let strategy: Strategy = "switch".parse().unwrap();
/// assert_eq!(strategy, Strategy::Switch);
/// assert_eq!(strategy.to_string(), "switch");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Stay with the initially committed door
    Keep,
    /// Move to the remaining unopened door after the reveal
    Switch,
}

impl Strategy {
    /// Both strategies, in report order
    pub const ALL: [Strategy; 2] = [Strategy::Keep, Strategy::Switch];

    /// The strategy label as a static string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::Keep => "keep",
            Strategy::Switch => "switch",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Strategy::Keep),
            "switch" => Ok(Strategy::Switch),
            _ => Err(CoreError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for strategy in Strategy::ALL {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = "stay".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownStrategy {
                name: "stay".to_string()
            }
        );
    }
}
