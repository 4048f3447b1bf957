//! Report registration macros.

/// Helper to select optional value or default.
#[doc(hidden)]
#[macro_export]
macro_rules! __report_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Registers a type as a report in the [`DescriptorReg`](crate::DescriptorReg) inventory.
///
/// Every field is optional and must end with a comma. Fields appear in the
/// order shown below. Without `key` the report is keyed by the type's
/// fully-qualified path; without `category` it lands in the root category.
///
/// # Examples
///
/// ```ignore
/// pub struct SalesSummary;
///
/// report!(SalesSummary, {
///     key: "sales/summary",
///     category: "Sales",
///     title: "Sales Summary",
///     permission: "Reports:Sales",
/// });
///
/// pub struct DetailReport;
///
/// report!(DetailReport, {
///     category: "Sales/Detail",
/// });
///
/// pub struct Overview;
///
/// report!(Overview);
/// ```
#[macro_export]
macro_rules! report {
	($ty:ident $(,)?) => {
		$crate::report!($ty, {});
	};
	($ty:ident, {
		$(key: $key:expr,)?
		$(category: $category:expr,)?
		$(title: $title:expr,)?
		$(permission: $permission:expr,)?
	} $(,)?) => {
		$crate::__paste::paste! {
			#[allow(non_upper_case_globals)]
			#[doc(hidden)]
			pub static [<REPORT_ $ty:upper>]: $crate::TypeDescriptor = {
				let desc = $crate::TypeDescriptor::of::<$ty>();
				let desc =
					$crate::__report_opt!($({desc.with_report_key($key)})?, desc.with_report());
				let desc = $crate::__report_opt!($({desc.with_category($category)})?, desc);
				let desc = $crate::__report_opt!($({desc.with_display_name($title)})?, desc);
				$crate::__report_opt!($({desc.with_required_permission($permission)})?, desc)
			};

			$crate::__inventory::submit! { $crate::DescriptorReg(&[<REPORT_ $ty:upper>]) }
		}
	};
}
