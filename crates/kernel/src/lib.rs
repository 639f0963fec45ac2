//! Core building blocks shared by every shelf crate: layered settings, the
//! module lifecycle trait, and the registry that drives it.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
pub use settings::Settings;
