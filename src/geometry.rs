//! Euclidean cost model over labeled 3D points.

use crate::catalog::Catalog;
use crate::error::Result;

/// A labeled point in 3D space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Unique, stable label (for example a system name).
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(id: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            z,
        }
    }

    /// Coordinates as an `[x, y, z]` array.
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Euclidean distance between two points.
///
/// Total: non-finite coordinates propagate into a non-finite result.
pub fn distance(a: &Point, b: &Point) -> f64 {
    euclidean(&a.coords(), &b.coords())
}

/// Euclidean distance between two raw coordinate triples.
///
/// Symmetric bit-for-bit: `euclidean(a, b) == euclidean(b, a)`.
#[inline]
pub(crate) fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Total length of an ordered path of identifiers.
///
/// Returns `0.0` for paths shorter than two. Fails with
/// [`Error::Lookup`](crate::Error::Lookup) on the first identifier that
/// the catalog does not contain.
pub fn path_cost<S: AsRef<str>>(path: &[S], catalog: &Catalog) -> Result<f64> {
    let points = path
        .iter()
        .map(|id| catalog.get(id.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    Ok(points.windows(2).map(|w| distance(w[0], w[1])).sum())
}
