//! Report categories.
//!
//! Category keys are hierarchical, with segments separated by `/`. Matching
//! ignores case: `"sales"` selects `"Sales"` and every category below it,
//! such as `"Sales/Detail"`, but not a sibling like `"SalesArchive"`.

use crate::services::TextLocalizer;

/// Separator between category key segments.
pub const SEPARATOR: char = '/';

/// Localization prefix for category titles.
pub const DEFAULT_TITLE_PREFIX: &str = "Report.Category.";

/// A report category with its resolved display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
	/// Hierarchical key; empty for the root category.
	pub key: &'static str,
	/// Localized title, or the last key segment.
	pub title: String,
}

impl Category {
	/// Creates a category, resolving its title through `localizer`.
	pub fn new(key: Option<&'static str>, localizer: &dyn TextLocalizer, prefix: &str) -> Self {
		let key = key.unwrap_or("");
		Self {
			key,
			title: resolve_category_title(Some(key), localizer, prefix),
		}
	}

	/// Returns true if this category is `query` or lies below it.
	#[inline]
	pub fn is_within(&self, query: &str) -> bool {
		key_matches(self.key, query)
	}
}

/// Resolves the display title for a category key.
///
/// Looks up `prefix` followed by the key with `/` replaced by `.`. When the
/// localizer has no text, the last key segment is used.
pub fn resolve_category_title(
	key: Option<&str>,
	localizer: &dyn TextLocalizer,
	prefix: &str,
) -> String {
	let key = key.unwrap_or("");
	let resource = format!("{prefix}{}", key.replace(SEPARATOR, "."));
	if let Some(title) = localizer.try_get(&resource) {
		return title;
	}
	match key.rfind(SEPARATOR) {
		Some(idx) => key[idx + SEPARATOR.len_utf8()..].to_owned(),
		None => key.to_owned(),
	}
}

/// Returns true if `key` equals `query` or starts with `query/`, ignoring case.
///
/// An empty query matches every key.
pub fn key_matches(key: &str, query: &str) -> bool {
	if query.is_empty() {
		return true;
	}
	let key = key.to_lowercase();
	let query = query.to_lowercase();
	key == query
		|| key
			.strip_prefix(query.as_str())
			.is_some_and(|rest| rest.starts_with(SEPARATOR))
}
