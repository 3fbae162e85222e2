//! Turning-movement direction shared by the synthesizer and the emitter.

use std::str::FromStr;

use crate::CoreError;

/// Direction of a turning movement through a junction.
///
/// The set is closed: CityFlow only produces these three movement types, and
/// anything else in a roadnet document is rejected at parse time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Straight,
    Left,
    Right,
}

impl Direction {
    /// Parse a CityFlow `roadLinks[].type` tag.
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        match tag {
            "go_straight" => Ok(Direction::Straight),
            "turn_left"   => Ok(Direction::Left),
            "turn_right"  => Ok(Direction::Right),
            other         => Err(CoreError::UnknownDirection(other.to_owned())),
        }
    }

    /// SUMO `dir` attribute code.
    pub fn as_code(self) -> &'static str {
        match self {
            Direction::Straight => "s",
            Direction::Left     => "l",
            Direction::Right    => "r",
        }
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
