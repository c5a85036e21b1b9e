//! Swagger parameter descriptors

use serde::{Deserialize, Serialize};

/// Where a parameter is carried in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
	Query,
	Path,
	Header,
	FormData,
	Body,
}

/// Swagger primitive type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
	String,
	Integer,
	Number,
	Boolean,
	Array,
	Object,
	File,
}

/// A single documented request parameter
///
/// Serializes with the keys `in`, `name`, `type`, `description`, `required`,
/// in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
	#[serde(rename = "in")]
	pub location: ParameterLocation,
	pub name: String,
	#[serde(rename = "type")]
	pub param_type: ParameterType,
	pub description: String,
	pub required: bool,
}

impl ParameterDescriptor {
	/// Creates an optional query-string parameter
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{ParameterDescriptor, ParameterType};
	///
	/// let param = ParameterDescriptor::query("page", ParameterType::String, "Page parameter");
	/// assert_eq!(
	///     serde_json::to_string(&param).unwrap(),
	///     r#"{"in":"query","name":"page","type":"string","description":"Page parameter","required":false}"#,
	/// );
	/// ```
	pub fn query(
		name: impl Into<String>,
		param_type: ParameterType,
		description: impl Into<String>,
	) -> Self {
		Self {
			location: ParameterLocation::Query,
			name: name.into(),
			param_type,
			description: description.into(),
			required: false,
		}
	}
}
