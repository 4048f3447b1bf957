//! Report registry.
//!
//! Report types describe themselves with a [`TypeDescriptor`] and are
//! registered at link time through [`report!`]. A [`ReportRegistry`] scans a
//! [`TypeSource`] once, indexes the discovered reports by key and by
//! category, and answers permission-filtered lookups:
//!
//! - [`ReportRegistry::has_available_reports_in_category`]
//! - [`ReportRegistry::available_reports_in_category`]
//! - [`ReportRegistry::report`]
//!
//! ```rust,ignore
//! pub struct SalesSummary;
//!
//! folio_reports::report!(SalesSummary, {
//!     key: "sales/summary",
//!     category: "Sales",
//!     title: "Sales Summary",
//!     permission: "Reports:Sales",
//! });
//!
//! let registry = ReportRegistry::builder()
//!     .source(InventorySource)
//!     .permissions(session_permissions)
//!     .localizer(texts)
//!     .build()?;
//!
//! for report in registry.available_reports_in_category("sales") {
//!     println!("{}", report.key);
//! }
//! ```

pub mod category;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod index;
#[doc(hidden)]
mod macros;
pub mod registry;
pub mod report;
pub mod services;
pub mod source;

pub use category::{Category, resolve_category_title};
pub use config::{BuildStrategy, DuplicatePolicy, RegistryConfig};
pub use descriptor::{DescriptorReg, ReportAttr, TypeDescriptor};
pub use error::RegistryError;
pub use index::ReportIndex;
pub use registry::{ReportRegistry, ReportRegistryBuilder};
pub use report::{EMPTY_PERMISSION_PLACEHOLDER, Report, TypeHandle};
pub use services::{NoLocalizer, PermissionError, PermissionService, TextLocalizer};
pub use source::{InventorySource, StaticSource, TypeSource};

#[doc(hidden)]
pub use paste as __paste;
#[doc(hidden)]
pub use inventory as __inventory;
