//! List operation assembly
//!
//! Combines the pagination parameters and responses of a view into a Swagger
//! operation object for its list endpoint.

use crate::config::IntrospectorConfig;
use crate::pagination::{PaginationIntrospector, get_pagination_introspector_with_config};
use crate::parameter::ParameterDescriptor;
use crate::response::{ResponseObject, Responses};
use crate::serializer::SerializerIntrospector;
use crate::view::PaginatedView;
use crate::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Swagger operation object of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerOperation {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	pub summary: String,
	#[serde(rename = "operationId")]
	pub operation_id: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub parameters: Vec<ParameterDescriptor>,
	pub responses: Responses,
}

impl SwaggerOperation {
	pub fn to_json(&self) -> SchemaResult<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	pub fn to_yaml(&self) -> SchemaResult<String> {
		Ok(serde_yaml::to_string(self)?)
	}
}

/// Builds the list operation of a view
///
/// Paginated views get the pagination parameters and envelope; views without
/// any pagination get a plain array response.
///
/// # Example
///
/// ```
/// use reinhardt_pagination::PageNumberPagination;
/// use reinhardt_swagger::{ListOperationBuilder, SerializerMeta, ViewDescriptor};
///
/// let view = ViewDescriptor::new("articles")
///     .serializer(SerializerMeta::new("ArticleSerializer"))
///     .pagination_class(PageNumberPagination::new());
///
/// let operation = ListOperationBuilder::new(&view).build().unwrap();
/// assert_eq!(operation.operation_id, "list_articles");
/// assert_eq!(operation.parameters[0].name, "page");
/// ```
pub struct ListOperationBuilder<'a, V: PaginatedView + ?Sized> {
	view: &'a V,
	config: IntrospectorConfig,
	include_tags: bool,
}

impl<'a, V: PaginatedView + ?Sized> ListOperationBuilder<'a, V> {
	pub fn new(view: &'a V) -> Self {
		Self {
			view,
			config: IntrospectorConfig::default(),
			include_tags: true,
		}
	}

	pub fn config(mut self, config: IntrospectorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn include_tags(mut self, include: bool) -> Self {
		self.include_tags = include;
		self
	}

	pub fn build(self) -> SchemaResult<SwaggerOperation> {
		let basename = self.view.get_basename();

		let (parameters, responses) =
			match get_pagination_introspector_with_config(self.view, &self.config) {
				Ok(introspector) => (introspector.parameters(), introspector.responses()),
				Err(SchemaError::UnsupportedPagination(_)) => {
					tracing::debug!(view = basename, "documenting unpaginated list operation");
					(Vec::new(), self.unpaginated_responses()?)
				}
				Err(e) => return Err(e),
			};

		let tags = if self.include_tags {
			vec![basename.to_string()]
		} else {
			Vec::new()
		};

		Ok(SwaggerOperation {
			tags,
			summary: format!("List {}", basename),
			operation_id: format!("list_{}", basename),
			parameters,
			responses,
		})
	}

	fn unpaginated_responses(&self) -> SchemaResult<Responses> {
		let serializer = self.view.get_serializer().cloned().ok_or_else(|| {
			SchemaError::MissingSerializer(format!(
				"view '{}' has no serializer",
				self.view.get_basename()
			))
		})?;
		let serializer = SerializerIntrospector::new(serializer);

		let mut responses = Responses::new();
		responses.insert(
			200,
			ResponseObject::new(
				self.config.default_response_description.clone(),
				json!({
					"type": "array",
					"items": serializer.build_response_object(),
				}),
			),
		);
		Ok(responses)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::serializer::SerializerMeta;
	use crate::view::ViewDescriptor;
	use reinhardt_pagination::CursorPagination;
	use rstest::rstest;

	#[rstest]
	fn test_unpaginated_view_lists_plain_array() {
		// Arrange
		let view = ViewDescriptor::new("tags").serializer(SerializerMeta::new("TagSerializer"));

		// Act
		let operation = ListOperationBuilder::new(&view).build().unwrap();

		// Assert
		assert!(operation.parameters.is_empty());
		let response = &operation.responses[&200u16];
		assert_eq!(response.description, "Successful operation");
		assert_eq!(response.schema["type"], json!("array"));
		assert_eq!(response.schema["items"]["schema"]["id"], json!("TagSerializer"));
	}

	#[rstest]
	fn test_missing_serializer_is_an_error() {
		// Arrange
		let view = ViewDescriptor::new("tags");

		// Act
		let result = ListOperationBuilder::new(&view).build();

		// Assert
		assert!(matches!(result, Err(SchemaError::MissingSerializer(_))));
	}

	#[rstest]
	fn test_tags_can_be_disabled() {
		// Arrange
		let view = ViewDescriptor::new("events")
			.serializer(SerializerMeta::new("EventSerializer"))
			.pagination_class(CursorPagination::new());

		// Act
		let operation = ListOperationBuilder::new(&view)
			.include_tags(false)
			.build()
			.unwrap();

		// Assert
		assert!(operation.tags.is_empty());
		assert_eq!(operation.summary, "List events");
		assert_eq!(operation.parameters[0].name, "cursor");
	}

	#[rstest]
	fn test_json_export_key_order() {
		// Arrange
		let view = ViewDescriptor::new("events")
			.serializer(SerializerMeta::new("EventSerializer"))
			.pagination_class(CursorPagination::new());
		let operation = ListOperationBuilder::new(&view).build().unwrap();

		// Act
		let exported = operation.to_json().unwrap();

		// Assert
		let tags = exported.find("\"tags\"").unwrap();
		let parameters = exported.find("\"parameters\"").unwrap();
		let responses = exported.find("\"responses\"").unwrap();
		assert!(tags < parameters && parameters < responses);
		assert!(exported.contains("\"operationId\": \"list_events\""));
	}

	#[rstest]
	fn test_yaml_export() {
		// Arrange
		let view = ViewDescriptor::new("events")
			.serializer(SerializerMeta::new("EventSerializer"))
			.pagination_class(CursorPagination::new());
		let operation = ListOperationBuilder::new(&view).build().unwrap();

		// Act
		let exported = operation.to_yaml().unwrap();
		let parsed: SwaggerOperation = serde_yaml::from_str(&exported).unwrap();

		// Assert
		assert!(exported.contains("operationId: list_events"));
		assert_eq!(parsed, operation);
	}
}
