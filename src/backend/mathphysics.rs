pub use point::Point2D;
pub use vector::Vector2D;


pub mod point;
pub mod vector;


pub type Meter = f64;


pub trait Position {
    fn position(&self) -> &Point2D;

    // NaN if any of the coordinates is missing a component.
    fn distance_to<P: Position>(&self, other: &P) -> Meter {
        let vector = Vector2D::new(*self.position(), *other.position());
        
        vector.size()
    }
}

impl Position for Point2D {
    fn position(&self) -> &Point2D {
        self
    }
}
