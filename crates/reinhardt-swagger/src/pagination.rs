//! Pagination introspectors
//!
//! Each pagination style documents its query parameters and the response
//! envelope wrapping the serializer schema. [`get_pagination_introspector`]
//! picks the introspector matching a view's pagination configuration.

use crate::config::IntrospectorConfig;
use crate::parameter::{ParameterDescriptor, ParameterType};
use crate::response::{ResponseObject, Responses};
use crate::serializer::SerializerIntrospector;
use crate::view::PaginatedView;
use crate::{SchemaError, SchemaResult};
use reinhardt_pagination::{
	CursorPagination, LimitOffsetPagination, PageNumberPagination, PaginationSerializer,
	PaginationStyle, PaginatorImpl,
};
use serde_json::{Map, Value, json};

/// Documents the query parameters and responses of a pagination style
pub trait PaginationIntrospector: Send + Sync {
	/// Query parameters accepted by the paginated endpoint, all optional
	fn parameters(&self) -> Vec<ParameterDescriptor>;

	/// Responses of the paginated endpoint, keyed by status code
	fn responses(&self) -> Responses;
}

/// Builds the `200` response wrapping the serializer schema in a page envelope
///
/// `count` is only documented for styles that report a total.
fn paginated_responses(
	serializer: &SerializerIntrospector,
	config: &IntrospectorConfig,
	with_count: bool,
	results_field: &str,
) -> Responses {
	let mut required = Vec::with_capacity(4);
	let mut properties = Map::new();

	if with_count {
		required.push("count".to_string());
		properties.insert("count".to_string(), json!({"type": "integer"}));
	}
	required.push("next".to_string());
	properties.insert("next".to_string(), json!({"type": "string"}));
	required.push("previous".to_string());
	properties.insert("previous".to_string(), json!({"type": "string"}));
	required.push(results_field.to_string());
	properties.insert(
		results_field.to_string(),
		json!({
			"type": "array",
			"items": serializer.build_response_object(),
		}),
	);

	let schema = json!({
		"type": "object",
		"id": config.paginator_id(serializer.name()),
		"required": required,
		"properties": Value::Object(properties),
	});

	let mut responses = Responses::new();
	responses.insert(
		200,
		ResponseObject::new(config.response_description.clone(), schema),
	);
	responses
}

fn page_size_parameter(param: &Option<String>) -> Option<ParameterDescriptor> {
	param
		.as_ref()
		.map(|name| ParameterDescriptor::query(name, ParameterType::Integer, "Page size parameter"))
}

/// Introspector for limit/offset pagination
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::LimitOffsetPagination;
/// use reinhardt_swagger::{
///     LimitOffsetPaginationIntrospector, PaginationIntrospector, SerializerIntrospector,
///     SerializerMeta,
/// };
///
/// let si = SerializerIntrospector::new(SerializerMeta::new("NoteSerializer"));
/// let introspector =
///     LimitOffsetPaginationIntrospector::new(LimitOffsetPagination::new().default_limit(20), si);
///
/// let parameters = introspector.parameters();
/// assert_eq!(parameters[0].description, "Limit parameter (default=20)");
/// assert_eq!(
///     introspector.responses()[&200u16].schema["id"],
///     "NoteSerializerPaginator",
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LimitOffsetPaginationIntrospector {
	pagination: LimitOffsetPagination,
	serializer: SerializerIntrospector,
	config: IntrospectorConfig,
}

impl LimitOffsetPaginationIntrospector {
	pub fn new(pagination: LimitOffsetPagination, serializer: SerializerIntrospector) -> Self {
		Self {
			pagination,
			serializer,
			config: IntrospectorConfig::default(),
		}
	}

	pub fn with_config(mut self, config: IntrospectorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn pagination(&self) -> &LimitOffsetPagination {
		&self.pagination
	}
}

impl PaginationIntrospector for LimitOffsetPaginationIntrospector {
	fn parameters(&self) -> Vec<ParameterDescriptor> {
		let default_limit = self
			.pagination
			.default_limit
			.map_or_else(|| "None".to_string(), |limit| limit.to_string());

		vec![
			ParameterDescriptor::query(
				&self.pagination.limit_query_param,
				ParameterType::String,
				format!("Limit parameter (default={})", default_limit),
			),
			ParameterDescriptor::query(
				&self.pagination.offset_query_param,
				ParameterType::Integer,
				"Offset parameter",
			),
		]
	}

	fn responses(&self) -> Responses {
		paginated_responses(&self.serializer, &self.config, true, "results")
	}
}

/// Introspector for page number pagination
#[derive(Debug, Clone)]
pub struct PageNumberPaginationIntrospector {
	pagination: PageNumberPagination,
	serializer: SerializerIntrospector,
	config: IntrospectorConfig,
}

impl PageNumberPaginationIntrospector {
	pub fn new(pagination: PageNumberPagination, serializer: SerializerIntrospector) -> Self {
		Self {
			pagination,
			serializer,
			config: IntrospectorConfig::default(),
		}
	}

	pub fn with_config(mut self, config: IntrospectorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn pagination(&self) -> &PageNumberPagination {
		&self.pagination
	}
}

impl PaginationIntrospector for PageNumberPaginationIntrospector {
	fn parameters(&self) -> Vec<ParameterDescriptor> {
		let mut parameters = vec![ParameterDescriptor::query(
			&self.pagination.page_query_param,
			ParameterType::String,
			"Page parameter",
		)];
		parameters.extend(page_size_parameter(&self.pagination.page_size_query_param));
		parameters
	}

	fn responses(&self) -> Responses {
		paginated_responses(&self.serializer, &self.config, true, "results")
	}
}

/// Introspector for cursor pagination
#[derive(Debug, Clone)]
pub struct CursorPaginationIntrospector {
	pagination: CursorPagination,
	serializer: SerializerIntrospector,
	config: IntrospectorConfig,
}

impl CursorPaginationIntrospector {
	pub fn new(pagination: CursorPagination, serializer: SerializerIntrospector) -> Self {
		Self {
			pagination,
			serializer,
			config: IntrospectorConfig::default(),
		}
	}

	pub fn with_config(mut self, config: IntrospectorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn pagination(&self) -> &CursorPagination {
		&self.pagination
	}
}

impl PaginationIntrospector for CursorPaginationIntrospector {
	fn parameters(&self) -> Vec<ParameterDescriptor> {
		let mut parameters = vec![ParameterDescriptor::query(
			&self.pagination.cursor_query_param,
			ParameterType::String,
			"Cursor parameter",
		)];
		parameters.extend(page_size_parameter(&self.pagination.page_size_query_param));
		parameters
	}

	fn responses(&self) -> Responses {
		// cursor pages carry no total
		paginated_responses(&self.serializer, &self.config, false, "results")
	}
}

/// Introspector for legacy `paginate_by` pagination
///
/// The page number is documented as an integer here, unlike
/// [`PageNumberPaginationIntrospector`] whose page parameter is a string.
#[derive(Debug, Clone)]
pub struct PaginationBySerializerIntrospector {
	pagination: PaginationSerializer,
	serializer: SerializerIntrospector,
	config: IntrospectorConfig,
}

impl PaginationBySerializerIntrospector {
	pub fn new(pagination: PaginationSerializer, serializer: SerializerIntrospector) -> Self {
		Self {
			pagination,
			serializer,
			config: IntrospectorConfig::default(),
		}
	}

	pub fn with_config(mut self, config: IntrospectorConfig) -> Self {
		self.config = config;
		self
	}

	pub fn pagination(&self) -> &PaginationSerializer {
		&self.pagination
	}
}

impl PaginationIntrospector for PaginationBySerializerIntrospector {
	fn parameters(&self) -> Vec<ParameterDescriptor> {
		let mut parameters = vec![ParameterDescriptor::query(
			&self.pagination.page_query_param,
			ParameterType::Integer,
			"Page parameter",
		)];
		parameters.extend(page_size_parameter(&self.pagination.paginate_by_param));
		parameters
	}

	fn responses(&self) -> Responses {
		paginated_responses(
			&self.serializer,
			&self.config,
			true,
			&self.pagination.results_field,
		)
	}
}

// ============================================================================
// Enum Wrapper and Dispatcher
// ============================================================================

/// The introspector selected for a view
#[derive(Debug, Clone)]
pub enum PaginationIntrospectorImpl {
	LimitOffset(LimitOffsetPaginationIntrospector),
	PageNumber(PageNumberPaginationIntrospector),
	Cursor(CursorPaginationIntrospector),
	PaginationBySerializer(PaginationBySerializerIntrospector),
}

impl PaginationIntrospectorImpl {
	/// Pagination class style, `None` for legacy `paginate_by` pagination
	pub fn style(&self) -> Option<PaginationStyle> {
		match self {
			Self::LimitOffset(_) => Some(PaginationStyle::LimitOffset),
			Self::PageNumber(_) => Some(PaginationStyle::PageNumber),
			Self::Cursor(_) => Some(PaginationStyle::Cursor),
			Self::PaginationBySerializer(_) => None,
		}
	}

	/// Short name of the selected pagination style
	pub fn style_name(&self) -> &'static str {
		self.style()
			.map_or("pagination_serializer", |style| style.as_str())
	}
}

impl PaginationIntrospector for PaginationIntrospectorImpl {
	fn parameters(&self) -> Vec<ParameterDescriptor> {
		match self {
			Self::LimitOffset(i) => i.parameters(),
			Self::PageNumber(i) => i.parameters(),
			Self::Cursor(i) => i.parameters(),
			Self::PaginationBySerializer(i) => i.parameters(),
		}
	}

	fn responses(&self) -> Responses {
		match self {
			Self::LimitOffset(i) => i.responses(),
			Self::PageNumber(i) => i.responses(),
			Self::Cursor(i) => i.responses(),
			Self::PaginationBySerializer(i) => i.responses(),
		}
	}
}

enum SelectedPagination {
	Class(PaginatorImpl),
	Legacy(PaginationSerializer),
}

/// Selects the introspector for a view using the default configuration
///
/// See [`get_pagination_introspector_with_config`].
pub fn get_pagination_introspector<V: PaginatedView + ?Sized>(
	view: &V,
) -> SchemaResult<PaginationIntrospectorImpl> {
	get_pagination_introspector_with_config(view, &IntrospectorConfig::default())
}

/// Selects the introspector for a view
///
/// Lookup order:
/// 1. the pagination class configured on the view
/// 2. legacy pagination configured on the view with `paginate_by` set
/// 3. the default pagination class from `config.pagination`
///
/// # Errors
///
/// - [`SchemaError::UnsupportedPagination`] when none of the above applies
/// - [`SchemaError::MissingSerializer`] when the view has no serializer
pub fn get_pagination_introspector_with_config<V: PaginatedView + ?Sized>(
	view: &V,
	config: &IntrospectorConfig,
) -> SchemaResult<PaginationIntrospectorImpl> {
	let basename = view.get_basename();

	// legacy pagination without `paginate_by` leaves the view unpaginated
	let legacy = view
		.get_legacy_pagination()
		.filter(|legacy| legacy.paginate_by.is_some());

	let selected = match (view.get_pagination_class(), legacy) {
		(Some(class), legacy) => {
			if legacy.is_some() {
				tracing::warn!(
					view = basename,
					"view sets both a pagination class and paginate_by; using the pagination class"
				);
			}
			SelectedPagination::Class(class.clone())
		}
		(None, Some(legacy)) => SelectedPagination::Legacy(legacy.clone()),
		(None, None) => match PaginatorImpl::from_settings(&config.pagination) {
			Some(class) => SelectedPagination::Class(class),
			None => {
				return Err(SchemaError::UnsupportedPagination(format!(
					"view '{}' has no pagination configured",
					basename
				)));
			}
		},
	};

	let serializer = view
		.get_serializer()
		.cloned()
		.map(SerializerIntrospector::new)
		.ok_or_else(|| {
			SchemaError::MissingSerializer(format!("view '{}' has no serializer", basename))
		})?;
	let config = config.clone();

	let introspector = match selected {
		SelectedPagination::Class(PaginatorImpl::LimitOffset(p)) => {
			PaginationIntrospectorImpl::LimitOffset(
				LimitOffsetPaginationIntrospector::new(p, serializer).with_config(config),
			)
		}
		SelectedPagination::Class(PaginatorImpl::PageNumber(p)) => {
			PaginationIntrospectorImpl::PageNumber(
				PageNumberPaginationIntrospector::new(p, serializer).with_config(config),
			)
		}
		SelectedPagination::Class(PaginatorImpl::Cursor(p)) => PaginationIntrospectorImpl::Cursor(
			CursorPaginationIntrospector::new(p, serializer).with_config(config),
		),
		SelectedPagination::Legacy(p) => PaginationIntrospectorImpl::PaginationBySerializer(
			PaginationBySerializerIntrospector::new(p, serializer).with_config(config),
		),
	};

	tracing::debug!(
		view = basename,
		style = introspector.style_name(),
		"selected pagination introspector"
	);
	Ok(introspector)
}
