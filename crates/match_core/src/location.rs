//! Planar locations: the nodes of the road network and the positions of riders and drivers.

/// Immutable 2D point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Hashable identity of this point: the exact bit pattern of both coordinates.
    pub fn key(&self) -> LocationKey {
        LocationKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

/// Exact-coordinate key used to intern locations as graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationKey(u64, u64);

// -0.0 and 0.0 compare equal as floats, so they must share a key.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
