//! Geometric primitives shared by the input and gesture code.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Absolute horizontal and vertical distance to `other`.
    pub fn abs_delta(&self, other: Point) -> (f32, f32) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }
}
