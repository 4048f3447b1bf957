//! Registry configuration.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! category-title-prefix = "Report.Category."
//! duplicate-policy = "last-wins"
//! build = "lazy"
//! ```

use serde::Deserialize;

use crate::category::DEFAULT_TITLE_PREFIX;
use crate::error::RegistryError;

/// Policy for handling duplicate report keys during index construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Keep the first report seen for a key.
	FirstWins,
	/// Overwrite with the last report seen.
	#[default]
	LastWins,
}

/// When the index is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildStrategy {
	/// On the first query.
	#[default]
	Lazy,
	/// While the registry is constructed.
	Eager,
}

/// Tunables for a [`ReportRegistry`](crate::ReportRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistryConfig {
	/// Resource key prefix for category titles.
	pub category_title_prefix: String,
	pub duplicate_policy: DuplicatePolicy,
	pub build: BuildStrategy,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			category_title_prefix: DEFAULT_TITLE_PREFIX.to_owned(),
			duplicate_policy: DuplicatePolicy::default(),
			build: BuildStrategy::default(),
		}
	}
}

impl RegistryConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self, RegistryError> {
		Ok(toml::from_str(input)?)
	}
}
