//! Serializer field types

use serde::{Deserialize, Serialize};

/// Kind of a serializer field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
	Field,
	Boolean,
	String,
	Integer,
	Float,
	Decimal,
	Date,
	DateTime,
	Time,
	Duration,
	Email,
	Url,
	Uuid,
	Choice,
	MultipleChoice,
	File,
	Image,
	List,
	NestedObject,
}

impl FieldType {
	/// Returns the Swagger primitive type and optional format for this field type
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::FieldType;
	///
	/// assert_eq!(FieldType::Integer.swagger_type(), ("integer", None));
	/// assert_eq!(FieldType::DateTime.swagger_type(), ("string", Some("date-time")));
	/// ```
	pub fn swagger_type(&self) -> (&'static str, Option<&'static str>) {
		match self {
			// Swagger 2.0 defines no format for times or durations
			Self::Field | Self::String | Self::Choice | Self::Time | Self::Duration => {
				("string", None)
			}
			Self::Boolean => ("boolean", None),
			Self::Integer => ("integer", None),
			Self::Float => ("number", Some("float")),
			Self::Decimal => ("number", Some("double")),
			Self::Date => ("string", Some("date")),
			Self::DateTime => ("string", Some("date-time")),
			Self::Email => ("string", Some("email")),
			Self::Url => ("string", Some("uri")),
			Self::Uuid => ("string", Some("uuid")),
			Self::File | Self::Image => ("file", None),
			Self::MultipleChoice | Self::List => ("array", None),
			Self::NestedObject => ("object", None),
		}
	}
}

/// One allowed value of a choice field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceInfo {
	pub value: String,
	pub display_name: String,
}

impl ChoiceInfo {
	pub fn new(value: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			display_name: display_name.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldType::Time)]
	#[case(FieldType::Duration)]
	#[case(FieldType::Field)]
	fn test_unformatted_string_types(#[case] field_type: FieldType) {
		// Act
		let mapped = field_type.swagger_type();

		// Assert
		assert_eq!(mapped, ("string", None));
	}

	#[rstest]
	#[case(FieldType::Date, "date")]
	#[case(FieldType::DateTime, "date-time")]
	#[case(FieldType::Url, "uri")]
	fn test_formatted_string_types(#[case] field_type: FieldType, #[case] format: &str) {
		// Act
		let mapped = field_type.swagger_type();

		// Assert
		assert_eq!(mapped, ("string", Some(format)));
	}
}
