//! C ABI for native hosts.
//!
//! Input and output are NUL-terminated JSON strings. Input is a
//! [`RawProblem`]; output is a serialized [`FleetResult`], or
//! `{"status":"invalid","message":...}` when the input is rejected.

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Serialize;

use crate::models::FleetResult;
use crate::packing::compute_minimum_fleet;
use crate::validation::RawProblem;

#[derive(Serialize)]
#[serde(untagged)]
enum Response {
    Solved(FleetResult),
    Invalid { status: &'static str, message: String },
}

impl Response {
    fn invalid(message: impl ToString) -> Self {
        Self::Invalid {
            status: "invalid",
            message: message.to_string(),
        }
    }
}

fn respond(input: &str) -> Response {
    let raw: RawProblem = match serde_json::from_str(input) {
        Ok(raw) => raw,
        Err(err) => return Response::invalid(format!("cannot read problem: {err}")),
    };
    match raw.validate() {
        Ok(problem) => Response::Solved(compute_minimum_fleet(&problem)),
        Err(err) => Response::invalid(err),
    }
}

fn solve_json(input: &str) -> Option<CString> {
    let json = serde_json::to_string(&respond(input)).ok()?;
    CString::new(json).ok()
}

/// Sizes the fleet for a JSON problem.
///
/// Returns a newly allocated JSON string that must be released with
/// [`u_fleet_free_string`], or null if `input` is null or not UTF-8.
///
/// # Safety
///
/// `input` must be null or point to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn u_fleet_solve_json(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(input) = CStr::from_ptr(input).to_str() else {
        return std::ptr::null_mut();
    };
    solve_json(input).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by [`u_fleet_solve_json`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by
/// [`u_fleet_solve_json`] that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn u_fleet_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
