use crate::settings::PaginationSettings;

/// Cursor based pagination
///
/// Cursor pages expose opaque `next`/`previous` links and never report a total
/// count.
///
/// Example URLs:
/// - `http://api.example.org/accounts/?cursor=cD0yMDIz`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPagination {
	/// Default page size
	pub page_size: Option<usize>,
	/// Query parameter name for cursor
	pub cursor_query_param: String,
	/// Query parameter name for page size (optional)
	pub page_size_query_param: Option<String>,
}

impl Default for CursorPagination {
	fn default() -> Self {
		Self {
			page_size: None,
			cursor_query_param: "cursor".to_string(),
			page_size_query_param: None,
		}
	}
}

impl CursorPagination {
	/// Creates a new CursorPagination with default settings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::CursorPagination;
	///
	/// let paginator = CursorPagination::new();
	/// assert_eq!(paginator.cursor_query_param, "cursor");
	/// assert!(paginator.page_size_query_param.is_none());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a CursorPagination whose page size comes from the settings
	pub fn from_settings(settings: &PaginationSettings) -> Self {
		Self {
			page_size: settings.page_size,
			..Self::default()
		}
	}

	/// Sets the default page size for cursor pagination
	pub fn page_size(mut self, size: usize) -> Self {
		self.page_size = Some(size);
		self
	}

	/// Sets the query parameter name for the cursor
	pub fn cursor_query_param(mut self, param: impl Into<String>) -> Self {
		self.cursor_query_param = param.into();
		self
	}

	/// Sets the query parameter name for custom page size
	pub fn page_size_query_param(mut self, param: impl Into<String>) -> Self {
		self.page_size_query_param = Some(param.into());
		self
	}}
