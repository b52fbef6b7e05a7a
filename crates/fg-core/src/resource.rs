//! Resource kinds a cell can carry.

use std::fmt;

/// What a cell offers when consumed.
///
/// `None` marks barren cells; it never appears on a `Full` cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceType {
    #[default]
    None,
    Food,
    Water,
}

impl ResourceType {
    /// `true` for every kind except `None`.
    #[inline]
    pub fn is_resource(self) -> bool {
        self != ResourceType::None
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::None  => "none",
            ResourceType::Food  => "food",
            ResourceType::Water => "water",
        };
        f.write_str(s)
    }
}
