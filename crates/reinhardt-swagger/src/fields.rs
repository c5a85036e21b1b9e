//! Field information and builder for serializer introspection

use crate::types::{ChoiceInfo, FieldType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Field metadata information
///
/// Numeric bounds are kept as JSON numbers so integer fields document integer
/// bounds (`0`, not `0.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
	#[serde(rename = "type")]
	pub field_type: FieldType,
	pub required: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub read_only: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub help_text: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub min_value: Option<Number>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_value: Option<Number>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub choices: Option<Vec<ChoiceInfo>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub child: Option<Box<FieldInfo>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub children: Option<IndexMap<String, FieldInfo>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_value: Option<Value>,
}

impl FieldInfo {
	/// Whether the field must be present in a payload
	///
	/// A field with a default or a read-only field is never required, whatever
	/// its `required` flag says.
	pub fn is_required(&self) -> bool {
		self.required && self.default_value.is_none() && self.read_only != Some(true)
	}
}

/// Builder for field information
pub struct FieldInfoBuilder {
	field_type: FieldType,
	required: bool,
	read_only: Option<bool>,
	label: Option<String>,
	help_text: Option<String>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	min_value: Option<Number>,
	max_value: Option<Number>,
	choices: Option<Vec<ChoiceInfo>>,
	child: Option<Box<FieldInfo>>,
	children: Option<IndexMap<String, FieldInfo>>,
	default_value: Option<Value>,
}

impl FieldInfoBuilder {
	/// Creates a new `FieldInfoBuilder` with the specified field type
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{FieldInfoBuilder, FieldType};
	///
	/// let field = FieldInfoBuilder::new(FieldType::String).build();
	/// assert_eq!(field.field_type, FieldType::String);
	/// assert!(!field.required);
	/// ```
	pub fn new(field_type: FieldType) -> Self {
		Self {
			field_type,
			required: false,
			read_only: None,
			label: None,
			help_text: None,
			min_length: None,
			max_length: None,
			min_value: None,
			max_value: None,
			choices: None,
			child: None,
			children: None,
			default_value: None,
		}
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = Some(read_only);
		self
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets the minimum value constraint for numeric fields
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{FieldInfoBuilder, FieldType};
	///
	/// let field = FieldInfoBuilder::new(FieldType::Integer)
	///     .min_value(1_i64)
	///     .build();
	/// assert_eq!(field.min_value, Some(serde_json::Number::from(1)));
	/// ```
	pub fn min_value(mut self, min_value: impl Into<Number>) -> Self {
		self.min_value = Some(min_value.into());
		self
	}

	pub fn max_value(mut self, max_value: impl Into<Number>) -> Self {
		self.max_value = Some(max_value.into());
		self
	}

	pub fn choices(mut self, choices: Vec<ChoiceInfo>) -> Self {
		self.choices = Some(choices);
		self
	}

	/// Sets the item type of a list field
	pub fn child(mut self, child: FieldInfo) -> Self {
		self.child = Some(Box::new(child));
		self
	}

	/// Sets the fields of a nested object, in declaration order
	pub fn children(mut self, children: IndexMap<String, FieldInfo>) -> Self {
		self.children = Some(children);
		self
	}

	/// Sets the default value of the field
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{FieldInfoBuilder, FieldType};
	/// use serde_json::json;
	///
	/// let field = FieldInfoBuilder::new(FieldType::Integer)
	///     .required(true)
	///     .default_value(json!(5))
	///     .build();
	/// assert_eq!(field.default_value, Some(json!(5)));
	/// assert!(!field.is_required());
	/// ```
	pub fn default_value(mut self, value: Value) -> Self {
		self.default_value = Some(value);
		self
	}

	pub fn build(self) -> FieldInfo {
		FieldInfo {
			field_type: self.field_type,
			required: self.required,
			read_only: self.read_only,
			label: self.label,
			help_text: self.help_text,
			min_length: self.min_length,
			max_length: self.max_length,
			min_value: self.min_value,
			max_value: self.max_value,
			choices: self.choices,
			child: self.child,
			children: self.children,
			default_value: self.default_value,
		}
	}
}
