//! Legacy view-level pagination
//!
//! Before pagination classes existed, a view declared `paginate_by` directly and
//! a pagination serializer wrapped the page. Only page number windowing is
//! available in this mode.

/// Pagination declared on the view through `paginate_by`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSerializer {
	/// Number of items per page
	pub paginate_by: Option<usize>,
	/// Query parameter letting the client override `paginate_by`
	pub paginate_by_param: Option<String>,
	/// Query parameter name for the page number
	pub page_query_param: String,
	/// Name of the envelope field holding the page items
	pub results_field: String,
}

impl Default for PaginationSerializer {
	fn default() -> Self {
		Self {
			paginate_by: None,
			paginate_by_param: None,
			page_query_param: "page".to_string(),
			results_field: "results".to_string(),
		}
	}
}

impl PaginationSerializer {
	/// Creates legacy pagination with `paginate_by` items per page
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_pagination::PaginationSerializer;
	///
	/// let pagination = PaginationSerializer::new(20);
	/// assert_eq!(pagination.paginate_by, Some(20));
	/// assert_eq!(pagination.page_query_param, "page");
	/// assert_eq!(pagination.results_field, "results");
	/// ```
	pub fn new(paginate_by: usize) -> Self {
		Self {
			paginate_by: Some(paginate_by),
			..Self::default()
		}
	}

	/// Sets the query parameter that overrides `paginate_by`
	pub fn paginate_by_param(mut self, param: impl Into<String>) -> Self {
		self.paginate_by_param = Some(param.into());
		self
	}

	/// Sets the query parameter name for the page number
	pub fn page_query_param(mut self, param: impl Into<String>) -> Self {
		self.page_query_param = param.into();
		self
	}

	/// Sets the envelope field name holding the page items
	pub fn results_field(mut self, field: impl Into<String>) -> Self {
		self.results_field = field.into();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_legacy_defaults() {
		// Act
		let pagination = PaginationSerializer::default();

		// Assert
		assert!(pagination.paginate_by.is_none());
		assert!(pagination.paginate_by_param.is_none());
		assert_eq!(pagination.page_query_param, "page");
		assert_eq!(pagination.results_field, "results");
	}

	#[rstest]
	fn test_legacy_builder_chain() {
		// Act
		let pagination = PaginationSerializer::new(10)
			.paginate_by_param("page_size")
			.results_field("objects");

		// Assert
		assert_eq!(pagination.paginate_by, Some(10));
		assert_eq!(pagination.paginate_by_param.as_deref(), Some("page_size"));
		assert_eq!(pagination.results_field, "objects");
	}
}
