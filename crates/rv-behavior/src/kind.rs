//! Selecting a policy by name (configuration files, command lines).

use std::fmt;
use std::str::FromStr;

use crate::BehaviorError;

/// The available policy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    Random,
    Route,
    Goal,
    Nearest,
    Lazy,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Random,
        PolicyKind::Route,
        PolicyKind::Goal,
        PolicyKind::Nearest,
        PolicyKind::Lazy,
    ];

    /// Matches `RobotPolicy::name` of the corresponding policy.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Random  => "random",
            PolicyKind::Route   => "route",
            PolicyKind::Goal    => "goal",
            PolicyKind::Nearest => "nearest",
            PolicyKind::Lazy    => "lazy",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BehaviorError::UnknownPolicy(s.to_string()))
    }
}
