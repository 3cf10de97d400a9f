use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::Meter;


#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Serialize, Deserialize
)]
#[serde(from = "Vec<Meter>", into = "[Meter; 2]")]
#[display("{x}, {y}")]
pub struct Point2D {
    pub x: Meter,
    pub y: Meter,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: Meter, y: Meter) -> Self {
        Self { x, y }
    }

    /// Missing components become NaN instead of failing, so a degenerate 
    /// coordinate propagates into every distance computed from it.
    #[must_use]
    pub fn from_components(components: &[Meter]) -> Self {
        Self {
            x: components.first().copied().unwrap_or(Meter::NAN),
            y: components.get(1).copied().unwrap_or(Meter::NAN),
        }
    }
}

impl From<Vec<Meter>> for Point2D {
    fn from(components: Vec<Meter>) -> Self {
        Self::from_components(&components)
    }
}

impl From<Point2D> for [Meter; 2] {
    fn from(point: Point2D) -> Self {
        [point.x, point.y]
    }
}
