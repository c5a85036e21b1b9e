use crate::settings::PaginationSettings;

/// Page number based pagination
///
/// Example URLs:
/// - `http://api.example.org/accounts/?page=4`
/// - `http://api.example.org/accounts/?page=4&page_size=100`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberPagination {
	/// Default page size
	pub page_size: Option<usize>,
	/// Query parameter name for page number
	pub page_query_param: String,
	/// Query parameter name for page size (optional)
	pub page_size_query_param: Option<String>,
}

impl Default for PageNumberPagination {
	fn default() -> Self {
		Self {
			page_size: None,
			page_query_param: "page".to_string(),
			page_size_query_param: None,
		}
	}
}

impl PageNumberPagination {
	/// Creates a new PageNumberPagination with default settings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::PageNumberPagination;
	///
	/// let paginator = PageNumberPagination::new();
	/// assert_eq!(paginator.page_size, None);
	/// assert_eq!(paginator.page_query_param, "page");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a PageNumberPagination whose page size comes from the settings
	pub fn from_settings(settings: &PaginationSettings) -> Self {
		Self {
			page_size: settings.page_size,
			..Self::default()
		}
	}

	/// Sets the default page size for pagination
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::PageNumberPagination;
	///
	/// let paginator = PageNumberPagination::new().page_size(20);
	/// assert_eq!(paginator.page_size, Some(20));
	/// ```
	pub fn page_size(mut self, size: usize) -> Self {
		self.page_size = Some(size);
		self
	}

	/// Sets the query parameter name for the page number
	pub fn page_query_param(mut self, param: impl Into<String>) -> Self {
		self.page_query_param = param.into();
		self
	}

	/// Sets the query parameter name for custom page size
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::PageNumberPagination;
	///
	/// let paginator = PageNumberPagination::new()
	///     .page_size_query_param("limit");
	/// assert_eq!(paginator.page_size_query_param, Some("limit".to_string()));
	/// ```
	pub fn page_size_query_param(mut self, param: impl Into<String>) -> Self {
		self.page_size_query_param = Some(param.into());
		self
	}}
