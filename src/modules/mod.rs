pub mod books;

use shelf_kernel::{ModuleRegistry, Settings};

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) {
    registry.register(books::create_module(settings));
}
