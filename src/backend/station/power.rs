use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::backend::mathphysics::Meter;


pub const NO_POWER: LinkPower = LinkPower(0.0);


pub type PowerValue = f64;


#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd, Serialize, 
    Deserialize
)]
#[display("{_0}")]
pub struct LinkPower(PowerValue);

impl LinkPower {
    #[must_use]
    pub fn new(value: PowerValue) -> Self {
        Self(value)
    }

    /// Quadratic falloff: zero beyond the reach, `(reach - distance)^2` 
    /// otherwise. A NaN distance fails the reach comparison and yields NaN.
    #[must_use]
    pub fn from_distance(distance: Meter, reach: Meter) -> Self {
        if distance > reach {
            return NO_POWER;
        }

        let falloff = reach - distance;

        Self(falloff * falloff)
    }

    #[must_use]
    pub fn value(&self) -> PowerValue {
        self.0
    }

    // NaN is never positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }
}
