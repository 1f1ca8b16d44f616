// Version information module for marketplace
//
// Provides version constants for the marketplace crate

/// Version string for the marketplace crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
