//! Reports derived from type descriptors.

use std::any::TypeId;
use std::cmp::Ordering;

use crate::category::Category;
use crate::descriptor::TypeDescriptor;

/// Permission recorded when a report declares an empty permission.
pub const EMPTY_PERMISSION_PLACEHOLDER: &str = "?";

/// Handle to the type a report was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle {
	/// Fully-qualified type path.
	pub name: &'static str,
	pub id: TypeId,
}

impl TypeHandle {
	pub fn of(desc: &TypeDescriptor) -> Self {
		Self {
			name: desc.type_name(),
			id: desc.type_id(),
		}
	}
}

/// A discovered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
	/// Origin type.
	pub ty: TypeHandle,
	/// Unique key.
	pub key: &'static str,
	/// Display title.
	pub title: Option<&'static str>,
	pub category: Category,
	/// Required permission; `None` means unrestricted.
	pub permission: Option<&'static str>,
}

impl Report {
	/// Derives a report from a descriptor filed under `category`.
	///
	/// Callers check [`TypeDescriptor::is_report`] first; the marker only
	/// contributes the explicit key here.
	pub fn new(desc: &TypeDescriptor, category: Category) -> Self {
		Self {
			ty: TypeHandle::of(desc),
			key: report_key(desc),
			title: desc.display_name,
			category,
			permission: report_permission(desc),
		}
	}

	/// Title used for ordering; absent titles sort as empty.
	#[inline]
	pub fn sort_title(&self) -> &str {
		self.title.unwrap_or("")
	}

	/// Orders reports by title, comparing UTF-16 code units.
	///
	/// Differs from `str::cmp` only between characters in U+E000..=U+FFFF
	/// and characters above U+FFFF: surrogate pairs sort below the former.
	pub fn cmp_title(&self, other: &Self) -> Ordering {
		self.sort_title()
			.encode_utf16()
			.cmp(other.sort_title().encode_utf16())
	}

	/// Returns true if the report has no permission requirement.
	#[inline]
	pub fn is_unrestricted(&self) -> bool {
		self.permission.is_none()
	}
}

/// Explicit report key, else the type path.
pub fn report_key(desc: &TypeDescriptor) -> &'static str {
	desc.report
		.and_then(|attr| attr.key)
		.unwrap_or_else(|| desc.type_name())
}

/// Required permission with empty values replaced by the placeholder.
pub fn report_permission(desc: &TypeDescriptor) -> Option<&'static str> {
	desc.required_permission.map(|perm| {
		if perm.is_empty() {
			EMPTY_PERMISSION_PLACEHOLDER
		} else {
			perm
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::category::DEFAULT_TITLE_PREFIX;
	use crate::services::NoLocalizer;

	struct Keyed;
	struct Unkeyed;

	static KEYED: TypeDescriptor = TypeDescriptor::of::<Keyed>()
		.with_report_key("keyed")
		.with_display_name("Keyed report")
		.with_required_permission("");
	static UNKEYED: TypeDescriptor = TypeDescriptor::of::<Unkeyed>().with_report();

	fn root() -> Category {
		Category::new(None, &NoLocalizer, DEFAULT_TITLE_PREFIX)
	}

	#[test]
	fn explicit_key_wins() {
		let report = Report::new(&KEYED, root());
		assert_eq!(report.key, "keyed");
		assert_eq!(report.title, Some("Keyed report"));
		assert_eq!(report.ty.id, TypeId::of::<Keyed>());
	}

	#[test]
	fn missing_key_uses_type_path() {
		let report = Report::new(&UNKEYED, root());
		assert_eq!(report.key, std::any::type_name::<Unkeyed>());
		assert_eq!(report.title, None);
		assert_eq!(report.sort_title(), "");
		assert!(report.is_unrestricted());
	}

	#[test]
	fn empty_permission_becomes_placeholder() {
		let report = Report::new(&KEYED, root());
		assert_eq!(report.permission, Some(EMPTY_PERMISSION_PLACEHOLDER));
		assert!(!report.is_unrestricted());
	}

	#[test]
	fn titles_compare_by_utf16_code_units() {
		static PRIVATE_USE: TypeDescriptor = TypeDescriptor::of::<Keyed>()
			.with_report()
			.with_display_name("\u{E000}");
		static EMOJI: TypeDescriptor = TypeDescriptor::of::<Unkeyed>()
			.with_report()
			.with_display_name("\u{1F600}");

		let private_use = Report::new(&PRIVATE_USE, root());
		let emoji = Report::new(&EMOJI, root());
		let untitled = Report::new(&UNKEYED, root());

		assert!(private_use.sort_title() < emoji.sort_title());
		assert_eq!(emoji.cmp_title(&private_use), Ordering::Less);
		assert_eq!(untitled.cmp_title(&emoji), Ordering::Less);
		assert_eq!(untitled.cmp_title(&untitled), Ordering::Equal);
	}
}
