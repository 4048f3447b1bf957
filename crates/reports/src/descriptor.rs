//! Static type descriptors.
//!
//! A descriptor carries the metadata a report type declares about itself:
//! the report marker (with an optional explicit key), a category, a display
//! name and a required permission. Types without the report marker may still
//! be described; the indexer skips them.

use std::any::TypeId;

/// Report marker on a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportAttr {
	/// Explicit report key. When absent the type's path is used.
	pub key: Option<&'static str>,
}

/// Compile-time description of a type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
	type_name: fn() -> &'static str,
	type_id: fn() -> TypeId,
	/// Report marker, if the type is a report.
	pub report: Option<ReportAttr>,
	/// Category key (`/`-separated).
	pub category: Option<&'static str>,
	/// Display name.
	pub display_name: Option<&'static str>,
	/// Permission required to view the report.
	pub required_permission: Option<&'static str>,
}

impl TypeDescriptor {
	/// Creates an unmarked descriptor for `T`.
	pub const fn of<T: 'static>() -> Self {
		Self {
			type_name: std::any::type_name::<T>,
			type_id: TypeId::of::<T>,
			report: None,
			category: None,
			display_name: None,
			required_permission: None,
		}
	}

	/// Marks the type as a report keyed by its type path.
	pub const fn with_report(mut self) -> Self {
		self.report = Some(ReportAttr { key: None });
		self
	}

	/// Marks the type as a report with an explicit key.
	pub const fn with_report_key(mut self, key: &'static str) -> Self {
		self.report = Some(ReportAttr { key: Some(key) });
		self
	}

	pub const fn with_category(mut self, category: &'static str) -> Self {
		self.category = Some(category);
		self
	}

	pub const fn with_display_name(mut self, name: &'static str) -> Self {
		self.display_name = Some(name);
		self
	}

	pub const fn with_required_permission(mut self, permission: &'static str) -> Self {
		self.required_permission = Some(permission);
		self
	}

	/// Fully-qualified path of the described type.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		(self.type_name)()
	}

	#[inline]
	pub fn type_id(&self) -> TypeId {
		(self.type_id)()
	}

	/// Returns true if the type carries the report marker.
	#[inline]
	pub fn is_report(&self) -> bool {
		self.report.is_some()
	}
}

impl core::fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("type_name", &self.type_name())
			.field("report", &self.report)
			.field("category", &self.category)
			.field("display_name", &self.display_name)
			.field("required_permission", &self.required_permission)
			.finish()
	}
}

/// Inventory wrapper collecting descriptors submitted by [`report!`](crate::report).
pub struct DescriptorReg(pub &'static TypeDescriptor);
inventory::collect!(DescriptorReg);

impl DescriptorReg {
	/// Returns the static descriptor.
	#[inline]
	pub fn def(&self) -> &'static TypeDescriptor {
		self.0
	}
}
