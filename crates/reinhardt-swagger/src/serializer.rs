//! Serializer introspection
//!
//! Turns serializer field metadata into Swagger object schemas. The pagination
//! introspectors nest these schemas inside their response envelopes.

use crate::fields::FieldInfo;
use crate::types::FieldType;
use indexmap::IndexMap;
use serde_json::{Map, Value, json};

/// Name and ordered fields of a serializer
#[derive(Debug, Clone, PartialEq)]
pub struct SerializerMeta {
	pub name: String,
	pub fields: IndexMap<String, FieldInfo>,
}

impl SerializerMeta {
	/// Creates serializer metadata without fields
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{FieldInfoBuilder, FieldType, SerializerMeta};
	///
	/// let meta = SerializerMeta::new("ArticleSerializer")
	///     .field("title", FieldInfoBuilder::new(FieldType::String).required(true).build())
	///     .field("body", FieldInfoBuilder::new(FieldType::String).build());
	///
	/// assert_eq!(meta.name, "ArticleSerializer");
	/// assert_eq!(meta.fields.len(), 2);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			fields: IndexMap::new(),
		}
	}

	/// Appends a field; re-declaring a name replaces the field in place
	pub fn field(mut self, name: impl Into<String>, info: FieldInfo) -> Self {
		self.fields.insert(name.into(), info);
		self
	}
}

/// Builds Swagger schemas for a serializer
#[derive(Debug, Clone, PartialEq)]
pub struct SerializerIntrospector {
	meta: SerializerMeta,
}

impl SerializerIntrospector {
	pub fn new(meta: SerializerMeta) -> Self {
		Self { meta }
	}

	/// Serializer name, used as the schema `id`
	pub fn name(&self) -> &str {
		&self.meta.name
	}

	pub fn meta(&self) -> &SerializerMeta {
		&self.meta
	}

	/// Builds the object schema of the serializer
	///
	/// Keys come out as `id`, `type`, `required`, `properties`. `required` is
	/// always present, empty when every field is optional.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::{FieldInfoBuilder, FieldType, SerializerIntrospector, SerializerMeta};
	/// use serde_json::json;
	///
	/// let meta = SerializerMeta::new("TagSerializer")
	///     .field("name", FieldInfoBuilder::new(FieldType::String).required(true).build());
	/// let schema = SerializerIntrospector::new(meta).build_schema();
	///
	/// assert_eq!(schema, json!({
	///     "id": "TagSerializer",
	///     "type": "object",
	///     "required": ["name"],
	///     "properties": {"name": {"type": "string"}},
	/// }));
	/// ```
	pub fn build_schema(&self) -> Value {
		let (required, properties) = object_members(&self.meta.fields);

		json!({
			"id": self.meta.name,
			"type": "object",
			"required": required,
			"properties": properties,
		})
	}

	/// Wraps the object schema as a response object: `{"schema": ...}`
	pub fn build_response_object(&self) -> Value {
		json!({ "schema": self.build_schema() })
	}
}

/// Builds the Swagger schema of a single field
///
/// # Examples
///
/// ```
/// use reinhardt_swagger::{FieldInfoBuilder, FieldType};
/// use reinhardt_swagger::serializer::build_field_schema;
/// use serde_json::json;
///
/// let field = FieldInfoBuilder::new(FieldType::Email).max_length(254).build();
/// assert_eq!(
///     build_field_schema(&field),
///     json!({"type": "string", "format": "email", "maxLength": 254}),
/// );
/// ```
pub fn build_field_schema(field: &FieldInfo) -> Value {
	let mut schema = Map::new();
	let (swagger_type, format) = field.field_type.swagger_type();

	schema.insert("type".to_string(), json!(swagger_type));
	if let Some(format) = format {
		schema.insert("format".to_string(), json!(format));
	}

	let choice_values = field
		.choices
		.as_ref()
		.map(|choices| choices.iter().map(|c| c.value.clone()).collect::<Vec<_>>());

	match &field.field_type {
		FieldType::Choice => {
			if let Some(values) = choice_values {
				schema.insert("enum".to_string(), json!(values));
			}
		}
		FieldType::MultipleChoice => {
			let mut items = Map::new();
			items.insert("type".to_string(), json!("string"));
			if let Some(values) = choice_values {
				items.insert("enum".to_string(), json!(values));
			}
			schema.insert("items".to_string(), Value::Object(items));
		}
		FieldType::List => {
			let items = match &field.child {
				Some(child) => build_field_schema(child),
				None => json!({"type": "string"}),
			};
			schema.insert("items".to_string(), items);
		}
		FieldType::NestedObject => {
			if let Some(children) = &field.children {
				let (required, properties) = object_members(children);
				if !required.is_empty() {
					schema.insert("required".to_string(), json!(required));
				}
				schema.insert("properties".to_string(), Value::Object(properties));
			}
		}
		_ => {}
	}

	if let Some(min_value) = &field.min_value {
		schema.insert("minimum".to_string(), Value::Number(min_value.clone()));
	}
	if let Some(max_value) = &field.max_value {
		schema.insert("maximum".to_string(), Value::Number(max_value.clone()));
	}
	if let Some(min_length) = field.min_length {
		schema.insert("minLength".to_string(), json!(min_length));
	}
	if let Some(max_length) = field.max_length {
		schema.insert("maxLength".to_string(), json!(max_length));
	}
	if let Some(default_value) = &field.default_value {
		schema.insert("default".to_string(), default_value.clone());
	}

	// help_text wins over label
	if let Some(description) = field.help_text.as_ref().or(field.label.as_ref()) {
		schema.insert("description".to_string(), json!(description));
	}

	if field.read_only == Some(true) {
		schema.insert("readOnly".to_string(), json!(true));
	}

	Value::Object(schema)
}

fn object_members(fields: &IndexMap<String, FieldInfo>) -> (Vec<String>, Map<String, Value>) {
	let mut required = Vec::new();
	let mut properties = Map::new();

	for (name, field) in fields {
		if field.is_required() {
			required.push(name.clone());
		}
		properties.insert(name.clone(), build_field_schema(field));
	}

	(required, properties)
}
