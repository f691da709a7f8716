//! Browser platform layer
//!
//! Handles the wasm32-only side of the page:
//! - LocalStorage-backed key-value storage
//! - Timers (setTimeout chains, animation frames)
//! - Applying `UiEvent`s to the document

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod timers;
