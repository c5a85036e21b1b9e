//! Swagger response objects

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Documented responses keyed by HTTP status code, in insertion order
pub type Responses = IndexMap<u16, ResponseObject>;

/// A single documented response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseObject {
	pub description: String,
	pub schema: Value,
}

impl ResponseObject {
	pub fn new(description: impl Into<String>, schema: Value) -> Self {
		Self {
			description: description.into(),
			schema,
		}
	}
}
