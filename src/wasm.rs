//! Browser worker bindings.
//!
//! A web worker loads the module once and then answers baseline and
//! refinement requests. Results cross the boundary as plain objects,
//! `{path, distance}` on success or `{error}` on failure; these functions
//! never throw.

use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, CatalogDocument};
use crate::error::{Error, Result};
use crate::solution::{Outcome, Solution};

/// Builds the initial route for `candidate_ids` (an array of strings)
/// over `catalog` (an object keyed by identifier, or an array of
/// `{name, x, y, z}` records).
#[wasm_bindgen(js_name = computeBaseline)]
pub fn compute_baseline(candidate_ids: JsValue, catalog: JsValue, start_id: String) -> JsValue {
    outcome_to_js(&baseline(candidate_ids, catalog, &start_id).into())
}

/// Runs one refinement pass of `time_per_pass` seconds from `path`.
#[wasm_bindgen(js_name = runPass)]
pub fn run_pass(path: JsValue, catalog: JsValue, time_per_pass: f64) -> JsValue {
    outcome_to_js(&refine(path, catalog, time_per_pass).into())
}

fn baseline(candidate_ids: JsValue, catalog: JsValue, start_id: &str) -> Result<Solution> {
    let ids: Vec<String> = from_js(candidate_ids, "candidate ids")?;
    let catalog = catalog_from_js(catalog)?;
    crate::compute_baseline(&ids, &catalog, start_id)
}

fn refine(path: JsValue, catalog: JsValue, time_per_pass: f64) -> Result<Solution> {
    let path: Vec<String> = from_js(path, "path")?;
    let catalog = catalog_from_js(catalog)?;
    crate::run_pass(&path, &catalog, time_per_pass)
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T> {
    from_value(value).map_err(|e| Error::validation(format!("malformed {what}: {e}")))
}

fn catalog_from_js(value: JsValue) -> Result<Catalog> {
    let document: CatalogDocument = from_js(value, "catalog")?;
    Catalog::try_from(document)
}

fn outcome_to_js(outcome: &Outcome) -> JsValue {
    to_value(outcome).unwrap_or_else(|e| {
        log::error!("failed to serialize outcome: {e}");
        JsValue::NULL
    })
}
