//! # Reinhardt Pagination
//!
//! Pagination classes for Reinhardt, inspired by Django REST Framework's pagination.
//!
//! These types describe *how* a list endpoint is windowed. Schema generators read
//! them to document the query parameters and the paginated response envelope.
//!
//! ## Pagination Styles
//!
//! - **PageNumberPagination**: Simple page number based pagination
//! - **LimitOffsetPagination**: Limit/offset based pagination
//! - **CursorPagination**: Cursor-based pagination for large datasets
//! - **PaginationSerializer**: Legacy `paginate_by` pagination configured on the view
//!
//! ## Example
//!
//! ```
//! use reinhardt_pagination::{PageNumberPagination, PaginatorImpl};
//!
//! let paginator = PageNumberPagination::new()
//!     .page_size(10)
//!     .page_size_query_param("page_size");
//!
//! let configured: PaginatorImpl = paginator.into();
//! assert_eq!(configured.style().as_str(), "page_number");
//! ```

mod cursor;
mod legacy;
mod limit_offset;
mod page_number;
mod settings;

pub use cursor::CursorPagination;
pub use legacy::PaginationSerializer;
pub use limit_offset::LimitOffsetPagination;
pub use page_number::PageNumberPagination;
pub use settings::{PaginationSettings, PaginationStyle};

// ============================================================================
// Enum Wrapper for Pagination Classes
// ============================================================================

/// Enum wrapper over the pagination classes a view can be configured with
///
/// Views hold a single pagination class; this wrapper lets them do so without
/// generics while keeping each class' own configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginatorImpl {
	/// Page number based pagination
	PageNumber(PageNumberPagination),
	/// Limit/offset based pagination
	LimitOffset(LimitOffsetPagination),
	/// Cursor based pagination
	Cursor(CursorPagination),
}

impl PaginatorImpl {
	/// Create a page number pagination instance
	pub fn page_number(pagination: PageNumberPagination) -> Self {
		Self::PageNumber(pagination)
	}

	/// Create a limit/offset pagination instance
	pub fn limit_offset(pagination: LimitOffsetPagination) -> Self {
		Self::LimitOffset(pagination)
	}

	/// Create a cursor pagination instance
	pub fn cursor(pagination: CursorPagination) -> Self {
		Self::Cursor(pagination)
	}

	/// Returns the style of the wrapped pagination class
	pub fn style(&self) -> PaginationStyle {
		match self {
			Self::PageNumber(_) => PaginationStyle::PageNumber,
			Self::LimitOffset(_) => PaginationStyle::LimitOffset,
			Self::Cursor(_) => PaginationStyle::Cursor,
		}
	}

	/// Builds the default pagination class configured in the settings
	///
	/// Returns `None` when `default_pagination_class` is not set, mirroring a
	/// project without `DEFAULT_PAGINATION_CLASS`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::{PaginationSettings, PaginationStyle, PaginatorImpl};
	///
	/// let settings = PaginationSettings {
	///     page_size: Some(25),
	///     default_pagination_class: Some(PaginationStyle::LimitOffset),
	/// };
	///
	/// match PaginatorImpl::from_settings(&settings) {
	///     Some(PaginatorImpl::LimitOffset(p)) => assert_eq!(p.default_limit, Some(25)),
	///     other => panic!("unexpected pagination class: {:?}", other),
	/// }
	/// ```
	pub fn from_settings(settings: &PaginationSettings) -> Option<Self> {
		let style = settings.default_pagination_class?;
		let paginator = match style {
			PaginationStyle::PageNumber => {
				Self::PageNumber(PageNumberPagination::from_settings(settings))
			}
			PaginationStyle::LimitOffset => {
				Self::LimitOffset(LimitOffsetPagination::from_settings(settings))
			}
			PaginationStyle::Cursor => Self::Cursor(CursorPagination::from_settings(settings)),
		};
		tracing::debug!(style = style.as_str(), "using default pagination class from settings");
		Some(paginator)
	}
}

impl From<PageNumberPagination> for PaginatorImpl {
	fn from(pagination: PageNumberPagination) -> Self {
		Self::PageNumber(pagination)
	}
}

impl From<LimitOffsetPagination> for PaginatorImpl {
	fn from(pagination: LimitOffsetPagination) -> Self {
		Self::LimitOffset(pagination)
	}
}

impl From<CursorPagination> for PaginatorImpl {
	fn from(pagination: CursorPagination) -> Self {
		Self::Cursor(pagination)
	}
}
