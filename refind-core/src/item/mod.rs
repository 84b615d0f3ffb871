//! The item/descriptor model every other subsystem operates on.

mod base;
mod descriptor;
mod descriptor_type;

pub use base::Item;
pub use descriptor::Descriptor;
pub use descriptor_type::DescriptorType;
