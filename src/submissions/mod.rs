//! Employer pitches
//!
//! Records flow one way: form fields + quiz score -> [`SubmissionRecord`] ->
//! [`SubmissionStore`] -> [`render`] -> cards on the page.

pub mod record;
pub mod render;
pub mod store;

pub use record::{PitchForm, SubmissionRecord};
pub use render::{DisplayCard, SubmissionCard, render, render_html};
pub use store::{SubmissionCollection, SubmissionStore};
