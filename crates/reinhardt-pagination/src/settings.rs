//! Project-wide pagination settings

use serde::{Deserialize, Serialize};

/// Pagination styles selectable as the project default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStyle {
	PageNumber,
	LimitOffset,
	Cursor,
}

impl PaginationStyle {
	/// Returns the snake_case name used in settings files
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::PageNumber => "page_number",
			Self::LimitOffset => "limit_offset",
			Self::Cursor => "cursor",
		}
	}
}

/// Pagination section of the REST framework settings
///
/// `page_size` is the `PAGE_SIZE` setting: it seeds the default page size of
/// every pagination class built through `from_settings`. Leaving it unset keeps
/// those classes without a default size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	pub page_size: Option<usize>,
	pub default_pagination_class: Option<PaginationStyle>,
}
