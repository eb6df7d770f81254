use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::math::Vector2;

/// Discrete direction a wall's exterior side faces.
///
/// Axis-aligned normals map to the relative labels (`Front`, `Back`,
/// `Left`, `Right`); every other normal maps to a compass point. Walls with
/// no unobstructed side are [`Facing::Inner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facing {
    Front,
    Back,
    Left,
    Right,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    #[serde(rename = "inner")]
    Inner,
}

impl Facing {
    /// Every label an exterior wall can carry.
    pub const EXTERIOR: [Self; 12] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The label as it appears in wall records and highlight selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::NorthEast => "NorthEast",
            Self::NorthWest => "NorthWest",
            Self::SouthEast => "SouthEast",
            Self::SouthWest => "SouthWest",
            Self::Inner => "inner",
        }
    }

    #[must_use]
    pub fn is_exterior(self) -> bool {
        self != Self::Inner
    }

    /// Labels an exterior unit normal.
    ///
    /// The normal is first rounded component-wise (ties to even). If that
    /// yields an axis unit vector the relative label is used:
    /// `(0, 1)` is `Front`, `(0, -1)` is `Back`, `(1, 0)` is `Right` and
    /// `(-1, 0)` is `Left`. Otherwise the compass octant of the unrounded
    /// normal is used, see [`Facing::from_degrees`].
    #[must_use]
    pub fn from_normal(normal: Vector2) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let rounded = (
            normal.x.round_ties_even() as i64,
            normal.y.round_ties_even() as i64,
        );
        match rounded {
            (0, 1) => Self::Front,
            (0, -1) => Self::Back,
            (1, 0) => Self::Right,
            (-1, 0) => Self::Left,
            _ => {
                let mut angle = normal.y.atan2(normal.x).to_degrees();
                if angle < 0.0 {
                    angle += 360.0;
                }
                Self::from_degrees(angle)
            }
        }
    }

    /// Buckets an angle in `[0, 360)` degrees into a compass octant.
    ///
    /// Octants are 45 degrees wide and half-open (`low <= angle < high`):
    /// `[22.5, 67.5)` is `SouthEast`, then `South`, `SouthWest`, `West`,
    /// `NorthWest`, `North`, `NorthEast`, and everything else, including the
    /// wrap-around `[337.5, 360)` and `[0, 22.5)`, is `East`.
    #[must_use]
    pub fn from_degrees(angle: f64) -> Self {
        const OCTANTS: [(f64, f64, Facing); 7] = [
            (22.5, 67.5, Facing::SouthEast),
            (67.5, 112.5, Facing::South),
            (112.5, 157.5, Facing::SouthWest),
            (157.5, 202.5, Facing::West),
            (202.5, 247.5, Facing::NorthWest),
            (247.5, 292.5, Facing::North),
            (292.5, 337.5, Facing::NorthEast),
        ];
        OCTANTS
            .iter()
            .find(|(low, high, _)| *low <= angle && angle < *high)
            .map_or(Self::East, |&(_, _, facing)| facing)
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Facing {
    type Err = ParameterError;

    /// Parses a label. Matching is case-sensitive: `"North"`, not `"north"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::EXTERIOR
            .into_iter()
            .chain(std::iter::once(Self::Inner))
            .find(|facing| facing.label() == s)
            .ok_or_else(|| ParameterError::UnknownFacing(s.to_owned()))
    }
}

/// Side of a floorplan a projection page is drawn for.
///
/// Top and bottom of the plan are the compass north and south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Back,
    Front,
    Left,
    Right,
    Top,
    Bottom,
    West,
    East,
}

impl ViewType {
    /// The wall facing highlighted when projecting this view.
    #[must_use]
    pub fn facing(self) -> Facing {
        match self {
            Self::Back => Facing::Back,
            Self::Front => Facing::Front,
            Self::Left => Facing::Left,
            Self::Right => Facing::Right,
            Self::Top => Facing::North,
            Self::Bottom => Facing::South,
            Self::West => Facing::West,
            Self::East => Facing::East,
        }
    }
}

impl From<ViewType> for Facing {
    fn from(view: ViewType) -> Self {
        view.facing()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn axis_normals_use_relative_labels() {
        assert_eq!(Facing::from_normal(Vector2::new(0.0, 1.0)), Facing::Front);
        assert_eq!(Facing::from_normal(Vector2::new(0.0, -1.0)), Facing::Back);
        assert_eq!(Facing::from_normal(Vector2::new(1.0, 0.0)), Facing::Right);
        assert_eq!(Facing::from_normal(Vector2::new(-1.0, 0.0)), Facing::Left);
    }

    #[test]
    fn negative_zero_component_still_axis_aligned() {
        assert_eq!(Facing::from_normal(Vector2::new(-0.0, 1.0)), Facing::Front);
        assert_eq!(Facing::from_normal(Vector2::new(-0.2, -0.98)), Facing::Back);
    }

    #[test]
    fn diagonal_normals_use_compass_points() {
        let d = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(Facing::from_normal(Vector2::new(0.707, 0.707)), Facing::SouthEast);
        assert_eq!(Facing::from_normal(Vector2::new(-d, d)), Facing::SouthWest);
        assert_eq!(Facing::from_normal(Vector2::new(-d, -d)), Facing::NorthWest);
        assert_eq!(Facing::from_normal(Vector2::new(d, -d)), Facing::NorthEast);
    }

    #[test]
    fn near_axis_normals_round_to_axis() {
        // 60 degrees: x = 0.5 rounds to even (0), y = 0.866 rounds to 1.
        let n = Vector2::new(0.5, 3.0_f64.sqrt() / 2.0);
        assert_eq!(Facing::from_normal(n), Facing::Front);

        // 30 degrees.
        let n = Vector2::new(3.0_f64.sqrt() / 2.0, 0.5);
        assert_eq!(Facing::from_normal(n), Facing::Right);
    }

    #[test]
    fn octant_boundaries_are_half_open() {
        assert_eq!(Facing::from_degrees(0.0), Facing::East);
        assert_eq!(Facing::from_degrees(22.499), Facing::East);
        assert_eq!(Facing::from_degrees(22.5), Facing::SouthEast);
        assert_eq!(Facing::from_degrees(67.5), Facing::South);
        assert_eq!(Facing::from_degrees(112.5), Facing::SouthWest);
        assert_eq!(Facing::from_degrees(157.5), Facing::West);
        assert_eq!(Facing::from_degrees(202.5), Facing::NorthWest);
        assert_eq!(Facing::from_degrees(247.5), Facing::North);
        assert_eq!(Facing::from_degrees(292.5), Facing::NorthEast);
        assert_eq!(Facing::from_degrees(337.499), Facing::NorthEast);
        assert_eq!(Facing::from_degrees(337.5), Facing::East);
        assert_eq!(Facing::from_degrees(359.9), Facing::East);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for facing in Facing::EXTERIOR {
            assert_eq!(facing.to_string().parse::<Facing>().unwrap(), facing);
        }
        assert_eq!("inner".parse::<Facing>().unwrap(), Facing::Inner);
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!(matches!(
            "north".parse::<Facing>(),
            Err(ParameterError::UnknownFacing(label)) if label == "north"
        ));
        assert!("Inner".parse::<Facing>().is_err());
    }

    #[test]
    fn serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Facing::NorthEast).unwrap(), r#""NorthEast""#);
        assert_eq!(serde_json::to_string(&Facing::Inner).unwrap(), r#""inner""#);
        let f: Facing = serde_json::from_str(r#""inner""#).unwrap();
        assert_eq!(f, Facing::Inner);
    }

    #[test]
    fn view_types_map_to_facings() {
        assert_eq!(ViewType::Top.facing(), Facing::North);
        assert_eq!(ViewType::Bottom.facing(), Facing::South);
        assert_eq!(Facing::from(ViewType::Left), Facing::Left);
    }
}
