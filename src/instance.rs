//! Index-resolved view of a set of identifiers.
//!
//! Entry points validate identifiers against the catalog once and copy
//! their coordinates into a dense table. The algorithms then work on
//! `usize` tours into that table, so no lookup can fail mid-loop.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::geometry::euclidean;
use crate::solution::Solution;

#[derive(Debug, Clone)]
pub(crate) struct Instance {
    ids: Vec<String>,
    coords: Vec<[f64; 3]>,
}

impl Instance {
    /// Resolves a candidate set. The start identifier is placed at index 0,
    /// the remaining identifiers follow in input order with repeats dropped.
    pub(crate) fn from_candidates<S: AsRef<str>>(
        candidates: &[S],
        catalog: &Catalog,
        start: &str,
    ) -> Result<Self> {
        if candidates.is_empty() {
            return Err(Error::validation("candidate set is empty"));
        }
        if !candidates.iter().any(|c| c.as_ref() == start) {
            return Err(Error::validation(format!(
                "start identifier '{start}' is not in the candidate set"
            )));
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        seen.insert(start);
        let mut ids = vec![start];
        for id in candidates.iter().map(AsRef::as_ref) {
            if seen.insert(id) {
                ids.push(id);
            }
        }

        Self::resolve(ids, catalog)
    }

    /// Resolves an existing path. Index `k` of the instance is position
    /// `k` of the path, so the identity tour reproduces the input.
    pub(crate) fn from_path<S: AsRef<str>>(path: &[S], catalog: &Catalog) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::validation("path is empty"));
        }

        let mut seen = HashSet::with_capacity(path.len());
        for id in path.iter().map(AsRef::as_ref) {
            if !seen.insert(id) {
                return Err(Error::validation(format!(
                    "identifier '{id}' appears more than once in the path"
                )));
            }
        }

        Self::resolve(path.iter().map(AsRef::as_ref).collect(), catalog)
    }

    fn resolve(ids: Vec<&str>, catalog: &Catalog) -> Result<Self> {
        let coords = ids
            .iter()
            .map(|id| catalog.get(id).map(|p| p.coords()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ids: ids.into_iter().map(str::to_owned).collect(),
            coords,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub(crate) fn dist(&self, a: usize, b: usize) -> f64 {
        euclidean(&self.coords[a], &self.coords[b])
    }

    /// Open-path length of a tour; `0.0` below two stops.
    pub(crate) fn cost(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.dist(w[0], w[1])).sum()
    }

    pub(crate) fn id(&self, index: usize) -> &str {
        &self.ids[index]
    }

    /// Maps a tour back to identifiers, recomputing its distance.
    pub(crate) fn solution(&self, tour: &[usize]) -> Solution {
        Solution {
            path: tour.iter().map(|&i| self.ids[i].clone()).collect(),
            distance: self.cost(tour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_coords([
            ("A", [0.0, 0.0, 0.0]),
            ("B", [1.0, 0.0, 0.0]),
            ("C", [2.0, 0.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_candidates_start_first_and_deduplicated() {
        let inst = Instance::from_candidates(&["B", "C", "A", "C"], &catalog(), "A").unwrap();
        assert_eq!(inst.len(), 3);
        assert_eq!(inst.id(0), "A");
        assert_eq!(inst.id(1), "B");
        assert_eq!(inst.id(2), "C");
    }

    #[test]
    fn test_candidates_validation_order() {
        let catalog = catalog();
        let empty: [&str; 0] = [];
        assert!(Instance::from_candidates(&empty, &catalog, "A")
            .unwrap_err()
            .is_validation());
        // start membership is checked before catalog lookups
        assert!(Instance::from_candidates(&["Z", "B"], &catalog, "A")
            .unwrap_err()
            .is_validation());
        assert!(Instance::from_candidates(&["A", "Z"], &catalog, "A")
            .unwrap_err()
            .is_lookup());
    }

    #[test]
    fn test_path_validation() {
        let catalog = catalog();
        let empty: [&str; 0] = [];
        assert!(Instance::from_path(&empty, &catalog).unwrap_err().is_validation());
        assert!(Instance::from_path(&["A", "B", "A"], &catalog)
            .unwrap_err()
            .is_validation());
        assert!(Instance::from_path(&["A", "Q"], &catalog).unwrap_err().is_lookup());
    }

    #[test]
    fn test_solution_recomputes_distance() {
        let inst = Instance::from_path(&["C", "A", "B"], &catalog()).unwrap();
        let sol = inst.solution(&[0, 1, 2]);
        assert_eq!(sol.path, vec!["C", "A", "B"]);
        assert!((sol.distance - 3.0).abs() < 1e-12);
        assert!((inst.cost(&[1, 2, 0]) - 2.0).abs() < 1e-12);
    }
}
