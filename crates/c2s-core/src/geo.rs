//! Planar coordinate type and polyline utilities.
//!
//! Both CityFlow and SUMO use a flat, metre-based Cartesian plane, so all
//! distances here are plain Euclidean distances in `f64`.

/// A point on the network plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// `x,y` — the coordinate pair syntax SUMO uses inside `shape` attributes.
impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Sum of consecutive segment lengths along `shape`.
///
/// Empty and single-point shapes have length zero.
pub fn polyline_length(shape: &[Point]) -> f64 {
    shape.windows(2).map(|w| w[0].distance(w[1])).sum()
}
