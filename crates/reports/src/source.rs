//! Type sources enumerate the descriptors a registry scans.

use crate::descriptor::{DescriptorReg, TypeDescriptor};

/// Supplies the type descriptors scanned by a [`ReportRegistry`](crate::ReportRegistry).
///
/// Iteration order is carried into per-category report lists.
pub trait TypeSource {
	/// Returns every descriptor known to this source.
	fn descriptors(&self) -> Vec<&'static TypeDescriptor>;
}

/// Descriptors registered at link time with [`report!`](crate::report).
///
/// `inventory` makes no ordering promise across crates or builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventorySource;

impl TypeSource for InventorySource {
	fn descriptors(&self) -> Vec<&'static TypeDescriptor> {
		inventory::iter::<DescriptorReg>
			.into_iter()
			.map(DescriptorReg::def)
			.collect()
	}
}

/// A fixed list of descriptors, scanned in order.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
	descriptors: Vec<&'static TypeDescriptor>,
}

impl StaticSource {
	pub fn new<I: IntoIterator<Item = &'static TypeDescriptor>>(descriptors: I) -> Self {
		Self {
			descriptors: descriptors.into_iter().collect(),
		}
	}
}

impl TypeSource for StaticSource {
	fn descriptors(&self) -> Vec<&'static TypeDescriptor> {
		self.descriptors.clone()
	}
}
