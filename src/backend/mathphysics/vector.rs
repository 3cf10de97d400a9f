use std::ops;

use impl_ops::{
    _impl_binary_op_borrowed_borrowed, _impl_binary_op_borrowed_owned, 
    _impl_binary_op_internal, _impl_binary_op_owned_borrowed, 
    _impl_binary_op_owned_owned, _parse_binary_op, impl_op, impl_op_ex
};

use super::{Meter, Point2D};


#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: Meter,
    pub y: Meter,
}

impl Vector2D {
    #[must_use]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        end - start
    }

    #[must_use]
    pub fn size(&self) -> Meter {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

impl_op_ex!(
    - |a: &Point2D, b: &Point2D| -> Vector2D { 
        Vector2D { x: a.x - b.x, y: a.y - b.y }
    }
);
