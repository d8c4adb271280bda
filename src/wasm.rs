//! WebAssembly bindings for the browser form.

use wasm_bindgen::prelude::*;

use crate::models::FleetResult;
use crate::packing::compute_minimum_fleet;
use crate::validation::RawProblem;

fn solve(input: JsValue) -> Result<FleetResult, JsValue> {
    let raw: RawProblem = serde_wasm_bindgen::from_value(input)
        .map_err(|err| js_sys::Error::new(&format!("cannot read problem: {err}")))?;
    let problem = raw
        .validate()
        .map_err(|err| js_sys::Error::new(&err.to_string()))?;
    Ok(compute_minimum_fleet(&problem))
}

/// Sizes the fleet for `{count, capacity, cities: [{demand, deadline}]}`.
///
/// Resolves to `{status: "minimum_trucks", trucks}` or
/// `{status: "infeasible"}`; throws an `Error` on invalid input.
#[wasm_bindgen(js_name = minimumTrucks)]
pub fn minimum_trucks(input: JsValue) -> Result<JsValue, JsValue> {
    let result = solve(input)?;
    serde_wasm_bindgen::to_value(&result).map_err(|err| js_sys::Error::new(&err.to_string()).into())
}

/// Same as [`minimum_trucks`], rendered as `"n trucks needed"` or `"Impossible"`.
#[wasm_bindgen(js_name = describeResult)]
pub fn describe_result(input: JsValue) -> Result<String, JsValue> {
    solve(input).map(|result| result.to_string())
}
