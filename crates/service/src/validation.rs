//! Request body validation hooks.
//!
//! DTOs describe their own constraints against the raw JSON value so the
//! HTTP layer can reject a body before any service call is made.

use serde_json::Value;

pub trait ValidateBody {
    /// Human readable constraint failures; empty means the body is acceptable.
    fn constraint_violations(body: &Value) -> Vec<String>;
}
