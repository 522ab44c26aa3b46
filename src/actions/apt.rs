//! APT package resource

use declarative::{Action, ApplyContext, ApplyError, ApplyResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::null_as_default;

/// Package manager binary
pub const APT_GET: &str = "/usr/bin/apt-get";

/// Desired presence of a package set
///
/// Any string decodes. Values other than `present` and `absent` are kept as
/// written and rejected when the action is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackageState {
    Present,
    Absent,
    Unsupported(String),
}

impl Default for PackageState {
    fn default() -> Self {
        Self::Unsupported(String::new())
    }
}

impl From<String> for PackageState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "present" => Self::Present,
            "absent" => Self::Absent,
            _ => Self::Unsupported(value),
        }
    }
}

impl From<PackageState> for String {
    fn from(state: PackageState) -> Self {
        match state {
            PackageState::Present => "present".to_string(),
            PackageState::Absent => "absent".to_string(),
            PackageState::Unsupported(value) => value,
        }
    }
}

impl fmt::Display for PackageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => f.write_str("present"),
            Self::Absent => f.write_str("absent"),
            Self::Unsupported(value) => f.write_str(value),
        }
    }
}

/// A set of packages that should be installed or removed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageAction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: PackageState,

    /// Package names, passed to apt in this order
    #[serde(default, rename = "pkgs", deserialize_with = "null_as_default")]
    pub packages: Vec<String>,

    /// Also remove configuration files when removing
    #[serde(default, deserialize_with = "null_as_default")]
    pub purge: bool,
}

#[cfg(test)]
impl PackageAction {
    pub fn present(packages: &[&str]) -> Self {
        Self {
            state: PackageState::Present,
            packages: packages.iter().map(ToString::to_string).collect(),
            purge: false,
        }
    }

    pub fn absent(packages: &[&str], purge: bool) -> Self {
        Self {
            state: PackageState::Absent,
            packages: packages.iter().map(ToString::to_string).collect(),
            purge,
        }
    }
}

impl PackageAction {
    /// Arguments for a single apt-get invocation, or the reason there is none
    fn apt_args(&self) -> Result<Vec<&str>, ApplyError> {
        let mut args = vec!["-y"];

        match &self.state {
            PackageState::Present => args.push("install"),
            PackageState::Absent => {
                if self.purge {
                    args.push("--purge");
                }
                args.push("remove");
            }
            PackageState::Unsupported(state) => {
                return Err(ApplyError::UnsupportedState {
                    state: state.clone(),
                    expected: "present or absent",
                });
            }
        }

        // An empty list goes through as-is; apt decides what that means
        args.extend(self.packages.iter().map(String::as_str));
        Ok(args)
    }
}

impl Action for PackageAction {
    fn kind(&self) -> &'static str {
        "apt"
    }

    fn apply(&self, ctx: &mut ApplyContext) -> Result<ApplyResult, ApplyError> {
        let args = self.apt_args()?;

        log::debug!("apt: {} [{}]", self.state, self.packages.join(", "));

        ctx.run(APT_GET, &args)?;

        Ok(match self.state {
            PackageState::Absent => ApplyResult::Removed,
            _ => ApplyResult::Created,
        })
    }
}
