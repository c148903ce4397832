//! Route solutions and the tagged boundary result.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::geometry::path_cost;

/// An ordered route and its total open-path distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Visiting order; index 0 is the start.
    pub path: Vec<String>,
    /// Sum of consecutive-pair distances over `path`.
    pub distance: f64,
}

impl Solution {
    /// Builds a solution from a path, computing its distance from the
    /// catalog rather than trusting a cached value.
    pub fn evaluate(path: Vec<String>, catalog: &Catalog) -> Result<Self> {
        let distance = path_cost(&path, catalog)?;
        Ok(Self { path, distance })
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The fixed start identifier, if any.
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }
}

/// Success payload or error message, for hosts that can only observe a
/// returned value.
///
/// Serializes as `{"path": [...], "distance": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Outcome {
    Solved(Solution),
    Failed { error: String },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(s) => Some(s),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Solved(_) => None,
            Outcome::Failed { error } => Some(error),
        }
    }
}

impl From<Result<Solution>> for Outcome {
    fn from(result: Result<Solution>) -> Self {
        match result {
            Ok(solution) => Outcome::Solved(solution),
            Err(e) => Outcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn catalog() -> Catalog {
        Catalog::from_coords([("A", [0.0, 0.0, 0.0]), ("B", [0.0, 6.0, 8.0])]).unwrap()
    }

    #[test]
    fn test_evaluate_recomputes_distance() {
        let sol = Solution::evaluate(vec!["A".into(), "B".into()], &catalog()).unwrap();
        assert!((sol.distance - 10.0).abs() < 1e-12);
        assert_eq!(sol.start(), Some("A"));
        assert_eq!(sol.len(), 2);
        assert!(!sol.is_empty());
    }

    #[test]
    fn test_evaluate_missing_identifier() {
        let err = Solution::evaluate(vec!["A".into(), "X".into()], &catalog()).unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: Outcome = Solution::evaluate(vec!["A".into()], &catalog()).into();
        assert!(ok.is_solved());
        assert_eq!(ok.solution().unwrap().distance, 0.0);
        assert!(ok.error().is_none());

        let failed: Outcome = Err::<Solution, _>(Error::validation("candidate set is empty")).into();
        assert!(!failed.is_solved());
        assert_eq!(
            failed.error(),
            Some("validation error: candidate set is empty")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_outcome_serializes_tagged_shapes() {
        let ok = Outcome::Solved(Solution {
            path: vec!["A".into(), "B".into()],
            distance: 10.0,
        });
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"path":["A","B"],"distance":10.0}"#
        );

        let failed = Outcome::Failed {
            error: "boom".into(),
        };
        assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"error":"boom"}"#);
    }
}
