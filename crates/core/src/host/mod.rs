//! Host seams - the directory capabilities the extension consumes.
//!
//! The host directory owns rendering, templating and storage. These traits
//! and models are the contract between the host adapter and the policy.

mod host_model;
mod host_traits;

pub use host_model::{
    AdminNotice, CategoryBlockAtts, CategoryBlockProperties, CategoryBlockType,
    CategoryItemContext, RequestContext, TermChecklistArgs, TermSelectArgs,
};
pub use host_traits::{
    CategoryImageProviderTrait, CategoryItemFilter, EntryOutputTrait, TemplateHostTrait,
};
