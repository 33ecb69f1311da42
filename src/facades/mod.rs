/// Facades module - the outward API surfaces.
///
/// Native callers use [`crate::logger::Logger`] and [`crate::global`]
/// directly; the wasm facade exposes the same surface to JS.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
