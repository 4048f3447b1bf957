//! Reports registered with `report!` are discovered through the inventory.

use std::collections::HashMap;

use folio_reports::{InventorySource, RegistryError, ReportRegistry, TypeSource, report};

pub struct SalesSummary;
pub struct RegionDetail;
pub struct Payroll;
pub struct Overview;
pub struct Helper;

report!(SalesSummary, {
	key: "sales/summary",
	category: "Sales",
	title: "Sales summary",
});

report!(RegionDetail, {
	category: "Sales/Regions",
	title: "By region",
});

report!(Payroll, {
	key: "hr/payroll",
	category: "HR",
	title: "Payroll",
	permission: "HR:Payroll",
});

report!(Overview);

fn grants(perms: &'static [&'static str]) -> impl Fn(&str) -> bool + Send + Sync + 'static {
	move |perm: &str| perms.contains(&perm)
}

fn registry(perms: &'static [&'static str]) -> ReportRegistry {
	let texts: HashMap<String, String> =
		[("Report.Category.HR".to_owned(), "Human resources".to_owned())]
			.into_iter()
			.collect();
	ReportRegistry::builder()
		.source(InventorySource)
		.permissions(grants(perms))
		.localizer(texts)
		.build()
		.unwrap()
}

#[test]
fn inventory_yields_submitted_descriptors() {
	let descs = InventorySource.descriptors();
	assert_eq!(descs.len(), 4);
	assert!(descs.iter().all(|d| d.is_report()));
	assert!(descs.iter().all(|d| d.type_name() != std::any::type_name::<Helper>()));
}

#[test]
fn macro_defaults_key_to_type_path() {
	let registry = registry(&[]);

	let detail = registry
		.report(std::any::type_name::<RegionDetail>(), true)
		.unwrap()
		.unwrap();
	assert_eq!(detail.title, Some("By region"));
	assert_eq!(detail.category.key, "Sales/Regions");
	assert_eq!(detail.category.title, "Regions");

	let overview = registry
		.report(std::any::type_name::<Overview>(), true)
		.unwrap()
		.unwrap();
	assert_eq!(overview.title, None);
	assert_eq!(overview.category.key, "");
}

#[test]
fn listing_merges_subcategories() {
	let registry = registry(&[]);

	let titles: Vec<_> = registry
		.available_reports_in_category("SALES")
		.iter()
		.map(|r| r.sort_title())
		.collect();
	assert_eq!(titles, vec!["By region", "Sales summary"]);
}

#[test]
fn restricted_reports_follow_grants() {
	let denied = registry(&[]);
	assert!(!denied.has_available_reports_in_category("HR"));
	assert!(matches!(
		denied.report("hr/payroll", true),
		Err(RegistryError::Permission(_))
	));
	assert_eq!(denied.category("HR").unwrap().title, "Human resources");

	let granted = registry(&["HR:Payroll"]);
	assert!(granted.has_available_reports_in_category("HR"));
	assert_eq!(
		granted.report("hr/payroll", true).unwrap().unwrap().title,
		Some("Payroll")
	);
}
