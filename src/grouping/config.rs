use std::fmt;
use std::str::FromStr;

use crate::grouping::error::ParsePivotModeError;

/// Where the new group node is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotMode {
    /// Center of the selection's world bounds.
    #[default]
    BoundsCenter,
    /// Horizontal center of the world bounds at their lowest Z. Handy for
    /// furniture and other things that stand on the floor.
    BoundsBottom,
    /// The active object's location and rotation.
    ActiveObject,
}

impl FromStr for PivotMode {
    type Err = ParsePivotModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" | "bounds-center" => Ok(PivotMode::BoundsCenter),
            "bottom" | "bounds-bottom" => Ok(PivotMode::BoundsBottom),
            "active" | "active-object" => Ok(PivotMode::ActiveObject),
            _ => Err(ParsePivotModeError(s.to_string())),
        }
    }
}

impl fmt::Display for PivotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PivotMode::BoundsCenter => "Bounds Center",
            PivotMode::BoundsBottom => "Bounds Bottom",
            PivotMode::ActiveObject => "Active Object",
        };
        f.write_str(name)
    }
}

/// Options for one run of the grouping command. Owned by the caller; the
/// command never stores it between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfiguration {
    pub pivot_mode: PivotMode,
    pub group_name: String,
    /// Copy the active object's rotation onto the group in bounds-based modes.
    pub align_rotation_to_active: bool,
    /// When false, hidden objects are dropped from the selection first.
    pub include_hidden: bool,
    /// Move the group and its children into the children's most common collection.
    pub full_parenting: bool,
}

impl Default for GroupConfiguration {
    fn default() -> Self {
        Self {
            pivot_mode: PivotMode::BoundsCenter,
            group_name: "Group".to_string(),
            align_rotation_to_active: false,
            include_hidden: true,
            full_parenting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pivot_mode() {
        assert_eq!("center".parse::<PivotMode>(), Ok(PivotMode::BoundsCenter));
        assert_eq!("Bottom".parse::<PivotMode>(), Ok(PivotMode::BoundsBottom));
        assert_eq!("active-object".parse::<PivotMode>(), Ok(PivotMode::ActiveObject));
        assert!("middle".parse::<PivotMode>().is_err());
    }

    #[test]
    fn defaults_match_panel() {
        let config = GroupConfiguration::default();
        assert_eq!(config.pivot_mode, PivotMode::BoundsCenter);
        assert_eq!(config.group_name, "Group");
        assert!(!config.align_rotation_to_active);
        assert!(config.include_hidden);
        assert!(!config.full_parenting);
    }
}
