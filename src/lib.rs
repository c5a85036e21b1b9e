//! # Reinhardt API Docs
//!
//! Swagger documentation for paginated list endpoints, inspired by the schema
//! introspection of Django REST Framework.
//!
//! ## Feature Flags
//!
//! - `pagination` - Pagination classes and settings
//! - `swagger` (default) - Pagination introspectors and list operation export
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_apidocs::prelude::*;
//!
//! let serializer = SerializerMeta::new("UserSerializer")
//!     .field("id", FieldInfoBuilder::new(FieldType::Integer).read_only(true).build())
//!     .field("username", FieldInfoBuilder::new(FieldType::String).required(true).build());
//!
//! let view = ViewDescriptor::new("users")
//!     .serializer(serializer)
//!     .pagination_class(LimitOffsetPagination::new().default_limit(20));
//!
//! let introspector = get_pagination_introspector(&view).unwrap();
//! let names: Vec<_> = introspector.parameters().into_iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["limit", "offset"]);
//!
//! let operation = ListOperationBuilder::new(&view).build().unwrap();
//! assert!(operation.to_json().unwrap().contains("UserSerializerPaginator"));
//! ```

#[cfg(feature = "pagination")]
pub use reinhardt_pagination as pagination;
#[cfg(feature = "swagger")]
pub use reinhardt_swagger as swagger;

#[cfg(feature = "pagination")]
pub use reinhardt_pagination::{
	CursorPagination, LimitOffsetPagination, PageNumberPagination, PaginationSerializer,
	PaginationSettings, PaginationStyle, PaginatorImpl,
};

#[cfg(feature = "swagger")]
pub use reinhardt_swagger::{
	IntrospectorConfig, ListOperationBuilder, PaginatedView, PaginationIntrospector,
	PaginationIntrospectorImpl, SchemaError, SchemaResult, SwaggerOperation, ViewDescriptor,
	get_pagination_introspector, get_pagination_introspector_with_config,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "pagination")]
	pub use crate::pagination::{
		CursorPagination, LimitOffsetPagination, PageNumberPagination, PaginationSerializer,
		PaginationSettings, PaginationStyle, PaginatorImpl,
	};

	#[cfg(feature = "swagger")]
	pub use crate::swagger::{
		FieldInfoBuilder, FieldType, IntrospectorConfig, ListOperationBuilder, PaginatedView,
		PaginationIntrospector, SchemaError, SchemaResult, SerializerIntrospector, SerializerMeta,
		ViewDescriptor, get_pagination_introspector, get_pagination_introspector_with_config,
	};
}

#[cfg(all(test, feature = "swagger"))]
mod tests {
	use super::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_prelude_documents_settings_paginated_view() {
		// Arrange
		let config = IntrospectorConfig::from_toml_str(
			r#"
			[pagination]
			page_size = 10
			default_pagination_class = "page_number"
			"#,
		)
		.unwrap();
		let view = ViewDescriptor::new("posts").serializer(SerializerMeta::new("PostSerializer"));

		// Act
		let operation = ListOperationBuilder::new(&view)
			.config(config)
			.build()
			.unwrap();

		// Assert
		assert_eq!(operation.parameters[0].name, "page");
		assert_eq!(
			operation.responses[&200u16].schema["id"],
			json!("PostSerializerPaginator")
		);
	}
}
