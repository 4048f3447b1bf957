//! Report index: reports by key and by category.
//!
//! ```rust,ignore
//! let index = ReportIndex::build(source.descriptors(), &localizer, &config);
//! let summary = index.get("sales/summary");
//! let sales = index.matching("sales").flat_map(|(_, reports)| reports);
//! ```

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::{debug, trace, warn};

use crate::category::Category;
use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::descriptor::TypeDescriptor;
use crate::report::Report;
use crate::services::TextLocalizer;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct CategoryEntry {
	category: Category,
	reports: Vec<usize>,
}

/// Immutable index over the reports of a type source.
///
/// Provides:
/// - O(1) lookup by key via [`get`](Self::get)
/// - Per-category report lists in scan order
/// - Case-insensitive hierarchical category matching via [`matching`](Self::matching)
pub struct ReportIndex {
	reports: Vec<Report>,
	by_key: FxHashMap<&'static str, usize>,
	by_category: FxIndexMap<&'static str, CategoryEntry>,
}

impl ReportIndex {
	/// Scans `descriptors` and indexes every marked report.
	///
	/// Descriptors without the report marker are skipped. Categories keep the
	/// order in which they were first seen; reports keep scan order within
	/// their category.
	pub fn build<I>(descriptors: I, localizer: &dyn TextLocalizer, config: &RegistryConfig) -> Self
	where
		I: IntoIterator<Item = &'static TypeDescriptor>,
	{
		let mut index = Self {
			reports: Vec::new(),
			by_key: FxHashMap::default(),
			by_category: FxIndexMap::default(),
		};
		let mut skipped = 0usize;

		for desc in descriptors {
			if !desc.is_report() {
				trace!(type_name = desc.type_name(), "skipping type without report marker");
				skipped += 1;
				continue;
			}

			let cat_key = desc.category.unwrap_or("");
			let idx = index.reports.len();
			let entry = index
				.by_category
				.entry(cat_key)
				.or_insert_with(|| CategoryEntry {
					category: Category::new(
						Some(cat_key),
						localizer,
						&config.category_title_prefix,
					),
					reports: Vec::new(),
				});
			entry.reports.push(idx);
			let report = Report::new(desc, entry.category.clone());

			index.insert_key(report.key, idx, config.duplicate_policy);
			index.reports.push(report);
		}

		debug!(
			reports = index.by_key.len(),
			categories = index.by_category.len(),
			skipped,
			"report index built"
		);
		index
	}

	fn insert_key(&mut self, key: &'static str, idx: usize, policy: DuplicatePolicy) {
		let Some(&existing) = self.by_key.get(key) else {
			self.by_key.insert(key, idx);
			return;
		};
		warn!(
			key,
			existing = self.reports[existing].ty.name,
			policy = ?policy,
			"duplicate report key"
		);
		if policy == DuplicatePolicy::LastWins {
			self.by_key.insert(key, idx);
		}
	}

	/// Looks up a report by exact key.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&Report> {
		self.by_key.get(key).map(|&idx| &self.reports[idx])
	}

	/// Returns the number of unique report keys.
	#[inline]
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	/// Returns true if no report was indexed.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}

	/// Returns the reports reachable by key, in scan order.
	pub fn reports(&self) -> impl Iterator<Item = &Report> + '_ {
		self.reports
			.iter()
			.enumerate()
			.filter(|(idx, report)| self.by_key.get(report.key) == Some(idx))
			.map(|(_, report)| report)
	}

	/// Returns all categories in first-seen order.
	pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
		self.by_category.values().map(|entry| &entry.category)
	}

	/// Looks up a category by exact key.
	pub fn category(&self, key: &str) -> Option<&Category> {
		self.by_category.get(key).map(|entry| &entry.category)
	}

	/// Returns the reports filed under exactly `key`, in scan order.
	pub fn reports_in(&self, key: &str) -> Option<impl Iterator<Item = &Report> + '_> {
		self.by_category
			.get(key)
			.map(|entry| entry.reports.iter().map(|&idx| &self.reports[idx]))
	}

	/// Returns every category equal to or below `query`, ignoring case, with
	/// its reports.
	pub fn matching<'a, 'q>(
		&'a self,
		query: &'q str,
	) -> impl Iterator<Item = (&'a Category, impl Iterator<Item = &'a Report> + 'a)> + use<'a, 'q> {
		self.by_category
			.values()
			.filter(move |entry| entry.category.is_within(query))
			.map(move |entry| {
				(
					&entry.category,
					entry.reports.iter().map(move |&idx| &self.reports[idx]),
				)
			})
	}
}

impl core::fmt::Debug for ReportIndex {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ReportIndex")
			.field("reports", &self.by_key.len())
			.field("categories", &self.by_category.len())
			.finish()
	}
}
