//! Views as seen by the schema introspectors

use crate::serializer::SerializerMeta;
use reinhardt_pagination::{PaginationSerializer, PaginatorImpl};

/// A list view exposing its serializer and pagination configuration
pub trait PaginatedView: Send + Sync {
	/// Base name of the view, used for tags and operation ids
	fn get_basename(&self) -> &str;

	/// Serializer describing the list items
	fn get_serializer(&self) -> Option<&SerializerMeta>;

	/// Pagination class configured on the view
	fn get_pagination_class(&self) -> Option<&PaginatorImpl> {
		None
	}

	/// Legacy `paginate_by` pagination configured on the view
	fn get_legacy_pagination(&self) -> Option<&PaginationSerializer> {
		None
	}
}

/// Plain description of a view
///
/// # Examples
///
/// ```
/// use reinhardt_pagination::CursorPagination;
/// use reinhardt_swagger::{PaginatedView, SerializerMeta, ViewDescriptor};
///
/// let view = ViewDescriptor::new("events")
///     .serializer(SerializerMeta::new("EventSerializer"))
///     .pagination_class(CursorPagination::new());
///
/// assert_eq!(view.get_basename(), "events");
/// assert!(view.get_pagination_class().is_some());
/// assert!(view.get_legacy_pagination().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDescriptor {
	basename: String,
	serializer: Option<SerializerMeta>,
	pagination_class: Option<PaginatorImpl>,
	legacy_pagination: Option<PaginationSerializer>,
}

impl ViewDescriptor {
	pub fn new(basename: impl Into<String>) -> Self {
		Self {
			basename: basename.into(),
			serializer: None,
			pagination_class: None,
			legacy_pagination: None,
		}
	}

	pub fn serializer(mut self, serializer: SerializerMeta) -> Self {
		self.serializer = Some(serializer);
		self
	}

	pub fn pagination_class(mut self, pagination: impl Into<PaginatorImpl>) -> Self {
		self.pagination_class = Some(pagination.into());
		self
	}

	pub fn legacy_pagination(mut self, pagination: PaginationSerializer) -> Self {
		self.legacy_pagination = Some(pagination);
		self
	}
}

impl PaginatedView for ViewDescriptor {
	fn get_basename(&self) -> &str {
		&self.basename
	}

	fn get_serializer(&self) -> Option<&SerializerMeta> {
		self.serializer.as_ref()
	}

	fn get_pagination_class(&self) -> Option<&PaginatorImpl> {
		self.pagination_class.as_ref()
	}

	fn get_legacy_pagination(&self) -> Option<&PaginationSerializer> {
		self.legacy_pagination.as_ref()
	}
}
