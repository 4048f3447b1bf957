//! Permission-aware report registry.
//!
//! The registry owns its collaborators and a [`ReportIndex`] built at most
//! once. Concurrent first queries race only for the [`OnceLock`]; exactly one
//! scan of the type source takes place.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::category::Category;
use crate::config::{BuildStrategy, RegistryConfig};
use crate::error::RegistryError;
use crate::index::ReportIndex;
use crate::report::Report;
use crate::services::{PermissionService, TextLocalizer};
use crate::source::TypeSource;

type SharedSource = Arc<dyn TypeSource + Send + Sync>;
type SharedPermissions = Arc<dyn PermissionService + Send + Sync>;
type SharedLocalizer = Arc<dyn TextLocalizer + Send + Sync>;

/// Report registry over a type source.
pub struct ReportRegistry {
	source: SharedSource,
	permissions: SharedPermissions,
	localizer: SharedLocalizer,
	config: RegistryConfig,
	index: OnceLock<ReportIndex>,
}

impl ReportRegistry {
	/// Starts building a registry.
	pub fn builder() -> ReportRegistryBuilder {
		ReportRegistryBuilder::default()
	}

	/// Creates a registry with the default configuration.
	pub fn new(
		source: impl TypeSource + Send + Sync + 'static,
		permissions: impl PermissionService + Send + Sync + 'static,
		localizer: impl TextLocalizer + Send + Sync + 'static,
	) -> Self {
		Self::from_parts(
			Arc::new(source),
			Arc::new(permissions),
			Arc::new(localizer),
			RegistryConfig::default(),
		)
	}

	fn from_parts(
		source: SharedSource,
		permissions: SharedPermissions,
		localizer: SharedLocalizer,
		config: RegistryConfig,
	) -> Self {
		let registry = Self {
			source,
			permissions,
			localizer,
			config,
			index: OnceLock::new(),
		};
		if registry.config.build == BuildStrategy::Eager {
			registry.index();
		}
		registry
	}

	/// Returns the index, scanning the type source on first use.
	pub fn index(&self) -> &ReportIndex {
		self.index.get_or_init(|| {
			debug!(strategy = ?self.config.build, "scanning type source for reports");
			ReportIndex::build(
				self.source.descriptors(),
				self.localizer.as_ref(),
				&self.config,
			)
		})
	}

	/// Returns true once the index has been built.
	#[inline]
	pub fn is_built(&self) -> bool {
		self.index.get().is_some()
	}

	/// Returns true if the caller may see `report`.
	pub fn is_visible(&self, report: &Report) -> bool {
		report
			.permission
			.is_none_or(|perm| self.permissions.has_permission(perm))
	}

	/// Returns true if the category `category_key` holds at least one report
	/// visible to the caller.
	///
	/// Only the exact category is considered; subcategories are not.
	pub fn has_available_reports_in_category(&self, category_key: &str) -> bool {
		self.index()
			.reports_in(category_key)
			.is_some_and(|mut reports| reports.any(|r| self.is_visible(r)))
	}

	/// Returns the visible reports in `category_key` and every category below
	/// it, sorted by title.
	///
	/// Category keys compare case-insensitively. An empty key selects all
	/// categories. Titles compare by UTF-16 code units (see
	/// [`Report::cmp_title`]) with absent titles sorting as empty; equal
	/// titles keep category and scan order.
	pub fn available_reports_in_category(&self, category_key: &str) -> Vec<&Report> {
		let mut reports: Vec<&Report> = self
			.index()
			.matching(category_key)
			.flat_map(|(_, reports)| reports)
			.filter(|r| self.is_visible(r))
			.collect();
		reports.sort_by(|a, b| a.cmp_title(b));
		reports
	}

	/// Looks up a report by exact key.
	///
	/// Fails with [`RegistryError::EmptyIndex`] when no report types were
	/// registered at all; an unknown key on a populated index is `Ok(None)`.
	/// With `validate_permission`, a restricted report is passed to
	/// [`PermissionService::validate_permission`] and its error is returned
	/// unchanged.
	pub fn report(
		&self,
		report_key: &str,
		validate_permission: bool,
	) -> Result<Option<&Report>, RegistryError> {
		let index = self.index();
		if index.is_empty() {
			return Err(RegistryError::EmptyIndex);
		}

		let Some(report) = index.get(report_key) else {
			return Ok(None);
		};
		if validate_permission && let Some(perm) = report.permission {
			self.permissions
				.validate_permission(perm, self.localizer.as_ref())?;
		}
		Ok(Some(report))
	}

	/// [`report`](Self::report) with permission validation.
	pub fn report_checked(&self, report_key: &str) -> Result<Option<&Report>, RegistryError> {
		self.report(report_key, true)
	}

	/// Returns all categories in first-seen order.
	pub fn categories(&self) -> impl Iterator<Item = &Category> + '_ {
		self.index().categories()
	}

	/// Looks up a category by exact key.
	pub fn category(&self, key: &str) -> Option<&Category> {
		self.index().category(key)
	}

	/// Returns every indexed report, one per key, regardless of permission.
	pub fn reports(&self) -> impl Iterator<Item = &Report> + '_ {
		self.index().reports()
	}

	/// Returns the number of unique report keys.
	pub fn len(&self) -> usize {
		self.index().len()
	}

	pub fn is_empty(&self) -> bool {
		self.index().is_empty()
	}
}

impl core::fmt::Debug for ReportRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ReportRegistry")
			.field("config", &self.config)
			.field("index", &self.index.get())
			.finish()
	}
}

/// Builder for [`ReportRegistry`].
///
/// All three collaborators are required; [`build`](Self::build) reports the
/// first one missing.
#[derive(Default)]
pub struct ReportRegistryBuilder {
	source: Option<SharedSource>,
	permissions: Option<SharedPermissions>,
	localizer: Option<SharedLocalizer>,
	config: RegistryConfig,
}

impl ReportRegistryBuilder {
	pub fn source(mut self, source: impl TypeSource + Send + Sync + 'static) -> Self {
		self.source = Some(Arc::new(source));
		self
	}

	pub fn permissions(
		mut self,
		permissions: impl PermissionService + Send + Sync + 'static,
	) -> Self {
		self.permissions = Some(Arc::new(permissions));
		self
	}

	pub fn localizer(mut self, localizer: impl TextLocalizer + Send + Sync + 'static) -> Self {
		self.localizer = Some(Arc::new(localizer));
		self
	}

	pub fn config(mut self, config: RegistryConfig) -> Self {
		self.config = config;
		self
	}

	/// Finishes the registry.
	///
	/// With [`BuildStrategy::Eager`] the type source is scanned here.
	pub fn build(self) -> Result<ReportRegistry, RegistryError> {
		let source = self
			.source
			.ok_or(RegistryError::MissingCollaborator("type source"))?;
		let permissions = self
			.permissions
			.ok_or(RegistryError::MissingCollaborator("permission service"))?;
		let localizer = self
			.localizer
			.ok_or(RegistryError::MissingCollaborator("text localizer"))?;
		Ok(ReportRegistry::from_parts(
			source,
			permissions,
			localizer,
			self.config,
		))
	}
}
