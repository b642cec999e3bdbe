//! Mirror transforms applied to patterns before stamping

use serde::{Deserialize, Serialize};

/// Two independent reflection axes
///
/// `flip_x` mirrors column offsets, `flip_y` mirrors row offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mirror {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Mirror {
    pub const NONE: Mirror = Mirror::new(false, false);
    pub const X: Mirror = Mirror::new(true, false);
    pub const Y: Mirror = Mirror::new(false, true);
    pub const XY: Mirror = Mirror::new(true, true);

    pub const fn new(flip_x: bool, flip_y: bool) -> Self {
        Self { flip_x, flip_y }
    }

    /// Apply `other` after `self`; each axis toggles independently
    pub fn then(self, other: Mirror) -> Mirror {
        Mirror::new(self.flip_x ^ other.flip_x, self.flip_y ^ other.flip_y)
    }

    pub fn is_identity(self) -> bool {
        !self.flip_x && !self.flip_y
    }
}

/// Direction of travel for a glider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    #[default]
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Heading {
    pub const ALL: [Heading; 4] = [
        Heading::DownRight,
        Heading::DownLeft,
        Heading::UpRight,
        Heading::UpLeft,
    ];
}

impl From<Heading> for Mirror {
    fn from(heading: Heading) -> Self {
        match heading {
            Heading::DownRight => Mirror::NONE,
            Heading::DownLeft => Mirror::X,
            Heading::UpRight => Mirror::Y,
            Heading::UpLeft => Mirror::XY,
        }
    }
}

impl From<Mirror> for Heading {
    fn from(mirror: Mirror) -> Self {
        match (mirror.flip_x, mirror.flip_y) {
            (false, false) => Heading::DownRight,
            (true, false) => Heading::DownLeft,
            (false, true) => Heading::UpRight,
            (true, true) => Heading::UpLeft,
        }
    }
}

/// Reflection applied to glyph entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reflection {
    #[default]
    Neutral,
    /// Columns are mirrored
    XReflection,
    /// Rows are mirrored
    YReflection,
    #[serde(rename = "xy_reflection")]
    XYReflection,
}

impl From<Reflection> for Mirror {
    fn from(reflection: Reflection) -> Self {
        match reflection {
            Reflection::Neutral => Mirror::NONE,
            Reflection::XReflection => Mirror::X,
            Reflection::YReflection => Mirror::Y,
            Reflection::XYReflection => Mirror::XY,
        }
    }
}

impl From<Mirror> for Reflection {
    fn from(mirror: Mirror) -> Self {
        match (mirror.flip_x, mirror.flip_y) {
            (false, false) => Reflection::Neutral,
            (true, false) => Reflection::XReflection,
            (false, true) => Reflection::YReflection,
            (true, true) => Reflection::XYReflection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_axes() {
        assert_eq!(Mirror::from(Heading::DownRight), Mirror::NONE);
        assert_eq!(Mirror::from(Heading::DownLeft), Mirror::X);
        assert_eq!(Mirror::from(Heading::UpRight), Mirror::Y);
        assert_eq!(Mirror::from(Heading::UpLeft), Mirror::XY);
    }

    #[test]
    fn test_composition() {
        assert_eq!(Mirror::X.then(Mirror::Y), Mirror::XY);
        assert_eq!(Mirror::XY.then(Mirror::X), Mirror::Y);
        assert!(Mirror::X.then(Mirror::X).is_identity());

        let up_left = Mirror::from(Heading::DownLeft).then(Heading::UpRight.into());
        assert_eq!(Heading::from(up_left), Heading::UpLeft);
    }

    #[test]
    fn test_conversions_agree() {
        for heading in Heading::ALL {
            let mirror = Mirror::from(heading);
            assert_eq!(Heading::from(mirror), heading);
            assert_eq!(Mirror::from(Reflection::from(mirror)), mirror);
        }
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&Reflection::XYReflection).unwrap();
        assert_eq!(yaml.trim(), "xy_reflection");

        let heading: Heading = serde_yaml::from_str("up_left").unwrap();
        assert_eq!(heading, Heading::UpLeft);
    }
}
