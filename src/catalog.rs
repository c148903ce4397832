//! Key-unique point catalog.
//!
//! The catalog is supplied by an external data provider and is read-only
//! to the algorithms. It is validated once at construction so that a
//! missing key is the only failure lookups can report.

use std::collections::hash_map::{Entry, Values};
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geometry::{distance, Point};

/// Mapping from identifier to [`Point`] with O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    points: HashMap<String, Point>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate identifiers.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Result<Self> {
        let iter = points.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for point in iter {
            match map.entry(point.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(Error::validation(format!(
                        "duplicate catalog identifier '{}'",
                        point.id
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(point);
                }
            }
        }
        Ok(Self { points: map })
    }

    /// Builds a catalog from `(identifier, [x, y, z])` pairs.
    pub fn from_coords<S: Into<String>>(
        coords: impl IntoIterator<Item = (S, [f64; 3])>,
    ) -> Result<Self> {
        Self::new(
            coords
                .into_iter()
                .map(|(id, [x, y, z])| Point::new(id, x, y, z)),
        )
    }

    /// Looks up a point by identifier.
    pub fn get(&self, id: &str) -> Result<&Point> {
        self.points.get(id).ok_or_else(|| Error::missing(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points in arbitrary order.
    pub fn iter(&self) -> Values<'_, String, Point> {
        self.points.values()
    }

    /// Identifiers of every point within `radius` of `center_id`
    /// (inclusive, center included), sorted by identifier.
    ///
    /// This is how a candidate set is typically selected upstream of
    /// [`compute_baseline`](crate::compute_baseline).
    pub fn within_radius(&self, center_id: &str, radius: f64) -> Result<Vec<String>> {
        if radius.is_nan() || radius < 0.0 {
            return Err(Error::validation(format!(
                "radius must be a non-negative number, got {radius}"
            )));
        }
        let center = self.get(center_id)?;
        let mut ids: Vec<String> = self
            .points
            .values()
            .filter(|p| distance(center, p) <= radius)
            .map(|p| p.id.clone())
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(feature = "serde")]
mod json {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::Catalog;
    use crate::error::{Error, Result};
    use crate::geometry::Point;

    #[derive(Debug, Deserialize)]
    pub(crate) struct Coords {
        x: f64,
        y: f64,
        z: f64,
    }

    /// Either flat `x/y/z` fields or a nested `location` object.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub(crate) enum Location {
        Flat { x: f64, y: f64, z: f64 },
        Nested { location: Coords },
    }

    impl Location {
        fn into_point(self, id: String) -> Point {
            match self {
                Location::Flat { x, y, z } => Point::new(id, x, y, z),
                Location::Nested { location } => Point::new(id, location.x, location.y, location.z),
            }
        }
    }

    #[derive(Debug, Deserialize)]
    pub(crate) struct Record {
        name: String,
        #[serde(flatten)]
        location: Location,
    }

    /// Accepted document shapes: a record array or an object keyed by name.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub(crate) enum CatalogDocument {
        Records(Vec<Record>),
        Keyed(HashMap<String, Location>),
    }

    impl TryFrom<CatalogDocument> for Catalog {
        type Error = Error;

        fn try_from(document: CatalogDocument) -> Result<Self> {
            match document {
                CatalogDocument::Records(records) => Catalog::new(
                    records
                        .into_iter()
                        .map(|r| r.location.into_point(r.name)),
                ),
                CatalogDocument::Keyed(map) => Catalog::new(
                    map.into_iter()
                        .map(|(id, location)| location.into_point(id)),
                ),
            }
        }
    }

    impl Catalog {
        /// Parses a catalog from JSON.
        ///
        /// Accepts an array of records (`{"name", "x", "y", "z"}` or
        /// `{"name", "location": {"x", "y", "z"}}`) or an object keyed by
        /// identifier whose values carry the same coordinate shapes.
        /// Unknown fields such as `id` are ignored.
        pub fn from_json(text: &str) -> Result<Self> {
            let document: CatalogDocument = serde_json::from_str(text)
                .map_err(|e| Error::validation(format!("malformed catalog: {e}")))?;
            Catalog::try_from(document)
        }
    }
}

#[cfg(feature = "wasm")]
pub(crate) use json::CatalogDocument;
