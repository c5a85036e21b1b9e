use crate::settings::PaginationSettings;

/// Limit/offset based pagination
///
/// Example URLs:
/// - `http://api.example.org/accounts/?limit=100`
/// - `http://api.example.org/accounts/?offset=400&limit=100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOffsetPagination {
	/// Default limit (page size), taken from `PAGE_SIZE` when built from settings
	pub default_limit: Option<usize>,
	/// Query parameter name for limit
	pub limit_query_param: String,
	/// Query parameter name for offset
	pub offset_query_param: String,
}

impl Default for LimitOffsetPagination {
	fn default() -> Self {
		Self {
			default_limit: None,
			limit_query_param: "limit".to_string(),
			offset_query_param: "offset".to_string(),
		}
	}
}

impl LimitOffsetPagination {
	/// Creates a new LimitOffsetPagination with default settings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::LimitOffsetPagination;
	///
	/// let paginator = LimitOffsetPagination::new();
	/// assert_eq!(paginator.default_limit, None);
	/// assert_eq!(paginator.limit_query_param, "limit");
	/// assert_eq!(paginator.offset_query_param, "offset");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a LimitOffsetPagination whose default limit is the settings' page size
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::{LimitOffsetPagination, PaginationSettings};
	///
	/// let settings = PaginationSettings { page_size: Some(15), ..Default::default() };
	/// let paginator = LimitOffsetPagination::from_settings(&settings);
	/// assert_eq!(paginator.default_limit, Some(15));
	/// ```
	pub fn from_settings(settings: &PaginationSettings) -> Self {
		Self {
			default_limit: settings.page_size,
			..Self::default()
		}
	}

	/// Sets the default limit (page size) for pagination
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::LimitOffsetPagination;
	///
	/// let paginator = LimitOffsetPagination::new().default_limit(25);
	/// assert_eq!(paginator.default_limit, Some(25));
	/// ```
	pub fn default_limit(mut self, limit: usize) -> Self {
		self.default_limit = Some(limit);
		self
	}

	/// Sets the query parameter name for the limit
	pub fn limit_query_param(mut self, param: impl Into<String>) -> Self {
		self.limit_query_param = param.into();
		self
	}

	/// Sets the query parameter name for the offset
	pub fn offset_query_param(mut self, param: impl Into<String>) -> Self {
		self.offset_query_param = param.into();
		self
	}
}
