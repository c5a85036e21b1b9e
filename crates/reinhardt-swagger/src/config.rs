//! Introspector configuration
//!
//! Settings are plain TOML:
//!
//! ```toml
//! response_description = "Paginated list"
//! paginator_suffix = "Page"
//! default_response_description = "Successful operation"
//!
//! [pagination]
//! page_size = 25
//! default_pagination_class = "limit_offset"
//! ```

use crate::SchemaResult;
use reinhardt_pagination::PaginationSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the pagination introspectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectorConfig {
	/// Description of the paginated `200` response
	pub response_description: String,
	/// Appended to the serializer name to form the envelope schema id
	pub paginator_suffix: String,
	/// Description of the `200` response of unpaginated list operations
	pub default_response_description: String,
	/// Project-wide pagination settings
	pub pagination: PaginationSettings,
}

impl Default for IntrospectorConfig {
	fn default() -> Self {
		Self {
			response_description: "Pagination response".to_string(),
			paginator_suffix: "Paginator".to_string(),
			default_response_description: "Successful operation".to_string(),
			pagination: PaginationSettings::default(),
		}
	}
}

impl IntrospectorConfig {
	/// Parses configuration from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_swagger::IntrospectorConfig;
	///
	/// let config = IntrospectorConfig::from_toml_str(r#"paginator_suffix = "Page""#).unwrap();
	/// assert_eq!(config.paginator_suffix, "Page");
	/// assert_eq!(config.response_description, "Pagination response");
	/// ```
	pub fn from_toml_str(source: &str) -> SchemaResult<Self> {
		let config = toml::from_str(source)?;
		Ok(config)
	}

	/// Reads configuration from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		let config = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded introspector settings");
		Ok(config)
	}

	/// Schema id of the paginated envelope for a serializer
	pub fn paginator_id(&self, serializer_name: &str) -> String {
		format!("{}{}", serializer_name, self.paginator_suffix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SchemaError;
	use reinhardt_pagination::PaginationStyle;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_default_config() {
		// Act
		let config = IntrospectorConfig::default();

		// Assert
		assert_eq!(config.response_description, "Pagination response");
		assert_eq!(config.paginator_id("UserSerializer"), "UserSerializerPaginator");
		assert!(config.pagination.page_size.is_none());
	}

	#[rstest]
	fn test_from_toml_with_pagination_section() {
		// Arrange
		let source = r#"
			response_description = "Paginated list"

			[pagination]
			page_size = 25
			default_pagination_class = "limit_offset"
		"#;

		// Act
		let config = IntrospectorConfig::from_toml_str(source).unwrap();

		// Assert
		assert_eq!(config.response_description, "Paginated list");
		assert_eq!(config.paginator_suffix, "Paginator");
		assert_eq!(config.pagination.page_size, Some(25));
		assert_eq!(
			config.pagination.default_pagination_class,
			Some(PaginationStyle::LimitOffset)
		);
	}

	#[rstest]
	fn test_invalid_toml_is_reported() {
		// Act
		let result = IntrospectorConfig::from_toml_str("page_size = [");

		// Assert
		assert!(matches!(result, Err(SchemaError::InvalidSettings(_))));
	}

	#[rstest]
	fn test_from_file() {
		// Arrange
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "paginator_suffix = \"Page\"").unwrap();

		// Act
		let config = IntrospectorConfig::from_file(file.path()).unwrap();

		// Assert
		assert_eq!(config.paginator_id("TagSerializer"), "TagSerializerPage");
	}

	#[rstest]
	fn test_from_missing_file() {
		// Act
		let result = IntrospectorConfig::from_file("/nonexistent/introspector.toml");

		// Assert
		assert!(matches!(result, Err(SchemaError::Io(_))));
	}
}
