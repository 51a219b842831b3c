//! Priority-ordered shape classification of neighbourhood signatures
//!
//! Each shape role is described by the cardinal directions it needs. The
//! rules are tried in a fixed order and the first whose requirement is a
//! subset of the signature wins, so a full cross never degrades into a
//! T-junction or straight segment.

use std::fmt;

use crate::spatial::neighborhood::Direction::{East, North, South, West};
use crate::spatial::neighborhood::{Direction, Signature};

/// Semantic tile variant assigned to an occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeRole {
    /// Open on all four sides
    Cross,
    /// T-junction whose stem points down
    HorizontalTDown,
    /// T-junction whose stem points up
    HorizontalTUp,
    /// T-junction whose stem points left
    VerticalTLeft,
    /// T-junction whose stem points right
    VerticalTRight,
    /// Corner in the bottom-left orientation
    CornerBottomLeft,
    /// Corner in the bottom-right orientation
    CornerBottomRight,
    /// Corner in the up-left orientation
    CornerUpLeft,
    /// Corner in the up-right orientation
    CornerUpRight,
    /// Straight segment running left to right
    HorizontalStraight,
    /// Straight segment running top to bottom
    VerticalStraight,
    /// Dead end facing down
    EndFacingDown,
    /// Dead end facing left
    EndFacingLeft,
    /// Dead end facing right
    EndFacingRight,
    /// Dead end facing up
    EndFacingUp,
}

impl ShapeRole {
    /// Every role in classification priority order
    pub const ALL: [Self; 15] = [
        Self::Cross,
        Self::HorizontalTDown,
        Self::HorizontalTUp,
        Self::VerticalTLeft,
        Self::VerticalTRight,
        Self::CornerBottomLeft,
        Self::CornerBottomRight,
        Self::CornerUpLeft,
        Self::CornerUpRight,
        Self::HorizontalStraight,
        Self::VerticalStraight,
        Self::EndFacingDown,
        Self::EndFacingLeft,
        Self::EndFacingRight,
        Self::EndFacingUp,
    ];

    /// Lookup table key naming this role's tile identifier
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cross => "gid_cross",
            Self::HorizontalTDown => "gid_horizontal_down",
            Self::HorizontalTUp => "gid_horizontal_up",
            Self::VerticalTLeft => "gid_vertical_left",
            Self::VerticalTRight => "gid_vertical_right",
            Self::CornerBottomLeft => "gid_bottom_left",
            Self::CornerBottomRight => "gid_bottom_right",
            Self::CornerUpLeft => "gid_up_left",
            Self::CornerUpRight => "gid_up_right",
            Self::HorizontalStraight => "gid_horizontal",
            Self::VerticalStraight => "gid_vertical",
            Self::EndFacingDown => "gid_end_down",
            Self::EndFacingLeft => "gid_end_left",
            Self::EndFacingRight => "gid_end_right",
            Self::EndFacingUp => "gid_end_up",
        }
    }

    /// Parse a lookup table key back into its role
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Human-readable role name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::HorizontalTDown => "horizontal-T-down",
            Self::HorizontalTUp => "horizontal-T-up",
            Self::VerticalTLeft => "vertical-T-left",
            Self::VerticalTRight => "vertical-T-right",
            Self::CornerBottomLeft => "corner-bottom-left",
            Self::CornerBottomRight => "corner-bottom-right",
            Self::CornerUpLeft => "corner-up-left",
            Self::CornerUpRight => "corner-up-right",
            Self::HorizontalStraight => "horizontal-straight",
            Self::VerticalStraight => "vertical-straight",
            Self::EndFacingDown => "end-facing-down",
            Self::EndFacingLeft => "end-facing-left",
            Self::EndFacingRight => "end-facing-right",
            Self::EndFacingUp => "end-facing-up",
        }
    }

    /// Position in the priority order (0 = checked first)
    pub const fn priority(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A role together with the directions a signature must contain for it
#[derive(Debug, Clone, Copy)]
pub struct ShapeRule {
    /// Role assigned when the rule matches
    pub role: ShapeRole,
    /// Directions that must all be occupied
    pub required: &'static [Direction],
}

impl ShapeRule {
    /// Whether `signature` is a superset of this rule's requirement
    pub fn matches(&self, signature: &Signature) -> bool {
        signature.contains_all(self.required)
    }
}

/// Classification rules in priority order
pub const SHAPE_RULES: [ShapeRule; 15] = [
    ShapeRule {
        role: ShapeRole::Cross,
        required: &[North, West, East, South],
    },
    ShapeRule {
        role: ShapeRole::HorizontalTDown,
        required: &[North, West, East],
    },
    ShapeRule {
        role: ShapeRole::HorizontalTUp,
        required: &[West, East, South],
    },
    ShapeRule {
        role: ShapeRole::VerticalTLeft,
        required: &[North, West, South],
    },
    ShapeRule {
        role: ShapeRole::VerticalTRight,
        required: &[North, East, South],
    },
    ShapeRule {
        role: ShapeRole::CornerBottomLeft,
        required: &[North, West],
    },
    ShapeRule {
        role: ShapeRole::CornerBottomRight,
        required: &[North, East],
    },
    ShapeRule {
        role: ShapeRole::CornerUpLeft,
        required: &[West, South],
    },
    ShapeRule {
        role: ShapeRole::CornerUpRight,
        required: &[East, South],
    },
    ShapeRule {
        role: ShapeRole::HorizontalStraight,
        required: &[West, East],
    },
    ShapeRule {
        role: ShapeRole::VerticalStraight,
        required: &[North, South],
    },
    ShapeRule {
        role: ShapeRole::EndFacingDown,
        required: &[South],
    },
    ShapeRule {
        role: ShapeRole::EndFacingLeft,
        required: &[East],
    },
    ShapeRule {
        role: ShapeRole::EndFacingRight,
        required: &[West],
    },
    ShapeRule {
        role: ShapeRole::EndFacingUp,
        required: &[North],
    },
];

/// Pick the highest-priority role whose requirement `signature` satisfies
///
/// Returns `None` when no cardinal neighbour is occupied.
pub fn classify(signature: &Signature) -> Option<ShapeRole> {
    SHAPE_RULES
        .iter()
        .find(|rule| rule.matches(signature))
        .map(|rule| rule.role)
}
