//! # Reinhardt Swagger Introspection
//!
//! Swagger 2.0 schema fragments generated from Reinhardt pagination classes and
//! serializer metadata.
//!
//! ## Features
//!
//! - **Pagination parameters**: Query parameters for limit/offset, page number,
//!   cursor and legacy `paginate_by` pagination
//! - **Paginated responses**: Response envelopes wrapping the serializer schema
//! - **Serializer schemas**: Object schemas built from field metadata
//! - **List operations**: Complete list operation objects, exportable to JSON/YAML
//!
//! ## Example
//!
//! ```
//! use reinhardt_pagination::LimitOffsetPagination;
//! use reinhardt_swagger::{
//!     FieldInfoBuilder, FieldType, PaginationIntrospector, SerializerMeta, ViewDescriptor,
//!     get_pagination_introspector,
//! };
//!
//! let serializer = SerializerMeta::new("UserSerializer")
//!     .field("id", FieldInfoBuilder::new(FieldType::Integer).read_only(true).build());
//! let view = ViewDescriptor::new("users")
//!     .serializer(serializer)
//!     .pagination_class(LimitOffsetPagination::new());
//!
//! let introspector = get_pagination_introspector(&view).unwrap();
//! let names: Vec<_> = introspector.parameters().into_iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["limit", "offset"]);
//! ```

pub mod config;
pub mod fields;
pub mod operation;
pub mod pagination;
pub mod parameter;
pub mod response;
pub mod serializer;
pub mod types;
pub mod view;

use thiserror::Error;

pub use config::IntrospectorConfig;
pub use fields::{FieldInfo, FieldInfoBuilder};
pub use operation::{ListOperationBuilder, SwaggerOperation};
pub use pagination::{
	CursorPaginationIntrospector, LimitOffsetPaginationIntrospector,
	PageNumberPaginationIntrospector, PaginationBySerializerIntrospector, PaginationIntrospector,
	PaginationIntrospectorImpl, get_pagination_introspector, get_pagination_introspector_with_config,
};
pub use parameter::{ParameterDescriptor, ParameterLocation, ParameterType};
pub use response::{ResponseObject, Responses};
pub use serializer::{SerializerIntrospector, SerializerMeta};
pub use types::{ChoiceInfo, FieldType};
pub use view::{PaginatedView, ViewDescriptor};

#[derive(Debug, Error)]
pub enum SchemaError {
	#[error("Unsupported pagination: {0}")]
	UnsupportedPagination(String),

	#[error("Missing serializer: {0}")]
	MissingSerializer(String),

	#[error("Invalid settings: {0}")]
	InvalidSettings(#[from] toml::de::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	JsonError(#[from] serde_json::Error),

	#[error("YAML error: {0}")]
	YamlError(#[from] serde_yaml::Error),
}

pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
