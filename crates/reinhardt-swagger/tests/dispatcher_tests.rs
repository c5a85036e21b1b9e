//! Introspector selection tests
//!
//! Covers the lookup order between a view's pagination class, legacy
//! `paginate_by` pagination and the project settings.

use reinhardt_pagination::{
	CursorPagination, LimitOffsetPagination, PageNumberPagination, PaginationSerializer,
	PaginationSettings, PaginationStyle, PaginatorImpl,
};
use reinhardt_swagger::{
	FieldInfoBuilder, FieldType, IntrospectorConfig, ListOperationBuilder, PaginatedView,
	PaginationIntrospector, PaginationIntrospectorImpl, SchemaError, SerializerMeta,
	ViewDescriptor, get_pagination_introspector, get_pagination_introspector_with_config,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn book_serializer() -> SerializerMeta {
	SerializerMeta::new("BookSerializer")
		.field(
			"id",
			FieldInfoBuilder::new(FieldType::Integer).read_only(true).build(),
		)
		.field(
			"title",
			FieldInfoBuilder::new(FieldType::String)
				.required(true)
				.max_length(200)
				.build(),
		)
}

fn settings_config(style: PaginationStyle, page_size: Option<usize>) -> IntrospectorConfig {
	IntrospectorConfig {
		pagination: PaginationSettings {
			page_size,
			default_pagination_class: Some(style),
		},
		..IntrospectorConfig::default()
	}
}

/// Hand-written view, the way an application would expose its own view types
struct BookListView {
	serializer: SerializerMeta,
	pagination: PaginatorImpl,
}

impl PaginatedView for BookListView {
	fn get_basename(&self) -> &str {
		"books"
	}

	fn get_serializer(&self) -> Option<&SerializerMeta> {
		Some(&self.serializer)
	}

	fn get_pagination_class(&self) -> Option<&PaginatorImpl> {
		Some(&self.pagination)
	}
}

#[rstest]
fn test_view_without_pagination_is_unsupported(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books").serializer(book_serializer);

	// Act
	let result = get_pagination_introspector(&view);

	// Assert
	assert!(matches!(result, Err(SchemaError::UnsupportedPagination(_))));
}

#[rstest]
fn test_view_without_serializer_is_reported() {
	// Arrange
	let view = ViewDescriptor::new("books").pagination_class(PageNumberPagination::new());

	// Act
	let result = get_pagination_introspector(&view);

	// Assert
	match result {
		Err(SchemaError::MissingSerializer(message)) => assert!(message.contains("books")),
		other => panic!("expected MissingSerializer, got {:?}", other),
	}
}

#[rstest]
fn test_pagination_class_wins_over_legacy(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.pagination_class(CursorPagination::new())
		.legacy_pagination(PaginationSerializer::new(10));

	// Act
	let introspector = get_pagination_introspector(&view).unwrap();

	// Assert
	assert!(matches!(introspector, PaginationIntrospectorImpl::Cursor(_)));
}

#[rstest]
fn test_legacy_wins_over_settings(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.legacy_pagination(PaginationSerializer::new(10));
	let config = settings_config(PaginationStyle::PageNumber, Some(25));

	// Act
	let introspector = get_pagination_introspector_with_config(&view, &config).unwrap();

	// Assert
	assert_eq!(introspector.style_name(), "pagination_serializer");
}

#[rstest]
fn test_legacy_without_paginate_by_is_unsupported(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.legacy_pagination(PaginationSerializer::default());

	// Act
	let result = get_pagination_introspector(&view);

	// Assert
	assert!(matches!(result, Err(SchemaError::UnsupportedPagination(_))));
}

#[rstest]
fn test_legacy_without_paginate_by_falls_back_to_settings(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.legacy_pagination(PaginationSerializer::default().paginate_by_param("per_page"));
	let config = settings_config(PaginationStyle::Cursor, None);

	// Act
	let introspector = get_pagination_introspector_with_config(&view, &config).unwrap();

	// Assert
	assert_eq!(introspector.style(), Some(PaginationStyle::Cursor));
}

#[rstest]
fn test_unpaginated_legacy_view_lists_plain_array(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.legacy_pagination(PaginationSerializer::default());

	// Act
	let operation = ListOperationBuilder::new(&view).build().unwrap();

	// Assert
	assert!(operation.parameters.is_empty());
	assert_eq!(operation.responses[&200u16].schema["type"], json!("array"));
}

#[rstest]
#[case(PaginationStyle::PageNumber, "page_number", "page")]
#[case(PaginationStyle::LimitOffset, "limit_offset", "limit")]
#[case(PaginationStyle::Cursor, "cursor", "cursor")]
fn test_settings_default_pagination_class(
	book_serializer: SerializerMeta,
	#[case] style: PaginationStyle,
	#[case] expected_style: &str,
	#[case] first_param: &str,
) {
	// Arrange
	let view = ViewDescriptor::new("books").serializer(book_serializer);
	let config = settings_config(style, None);

	// Act
	let introspector = get_pagination_introspector_with_config(&view, &config).unwrap();

	// Assert
	assert_eq!(introspector.style_name(), expected_style);
	assert_eq!(introspector.parameters()[0].name, first_param);
}

#[rstest]
fn test_settings_page_size_becomes_default_limit(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books").serializer(book_serializer);
	let config = settings_config(PaginationStyle::LimitOffset, Some(25));

	// Act
	let introspector = get_pagination_introspector_with_config(&view, &config).unwrap();

	// Assert
	assert_eq!(
		introspector.parameters()[0].description,
		"Limit parameter (default=25)"
	);
}

#[rstest]
fn test_custom_view_through_trait_object(book_serializer: SerializerMeta) {
	// Arrange
	let view = BookListView {
		serializer: book_serializer,
		pagination: PaginatorImpl::limit_offset(LimitOffsetPagination::new().default_limit(50)),
	};
	let view: &dyn PaginatedView = &view;

	// Act
	let introspector = get_pagination_introspector(view).unwrap();

	// Assert
	assert!(matches!(
		introspector,
		PaginationIntrospectorImpl::LimitOffset(_)
	));
	assert_eq!(
		introspector.parameters()[0].description,
		"Limit parameter (default=50)"
	);
}

#[rstest]
fn test_page_number_envelope(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.pagination_class(PageNumberPagination::new());

	// Act
	let responses = get_pagination_introspector(&view).unwrap().responses();

	// Assert
	let schema = &responses[&200u16].schema;
	assert_eq!(schema["id"], json!("BookSerializerPaginator"));
	assert_eq!(
		schema["required"],
		json!(["count", "next", "previous", "results"])
	);
	assert_eq!(
		schema["properties"]["results"]["items"]["schema"]["required"],
		json!(["title"])
	);
}

#[rstest]
fn test_cursor_envelope_omits_count(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books")
		.serializer(book_serializer)
		.pagination_class(CursorPagination::new());

	// Act
	let responses = get_pagination_introspector(&view).unwrap().responses();

	// Assert
	let schema = &responses[&200u16].schema;
	assert_eq!(schema["required"], json!(["next", "previous", "results"]));
	assert!(schema["properties"].get("count").is_none());
}

#[rstest]
fn test_list_operation_uses_settings(book_serializer: SerializerMeta) {
	// Arrange
	let view = ViewDescriptor::new("books").serializer(book_serializer);
	let config = settings_config(PaginationStyle::PageNumber, Some(20));

	// Act
	let operation = ListOperationBuilder::new(&view)
		.config(config)
		.build()
		.unwrap();

	// Assert
	assert_eq!(operation.tags, vec!["books"]);
	assert_eq!(operation.operation_id, "list_books");
	assert_eq!(operation.parameters[0].name, "page");
	assert_eq!(
		operation.responses[&200u16].description,
		"Pagination response"
	);
}
