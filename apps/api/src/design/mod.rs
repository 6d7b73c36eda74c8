// Design engine: role registry, random variants, token resolution, themes.
// Everything here is pure table lookup; no I/O.

pub mod engine;
pub mod handlers;
pub mod roles;
pub mod themes;
pub mod variant;

pub use variant::VariantGenerator;
