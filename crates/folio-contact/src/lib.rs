//! Contact form submission.
//!
//! This crate provides:
//! - `ContactFormDraft` - Field values and required-field checks
//! - `SubmissionStatus` - The four-state status shown by the form
//! - `RelayPayload` - The JSON body the form relay expects
//! - `RelayTransport` / `HttpRelay` - The outbound POST seam
//! - `RevertTimer` - Cancellable revert of transient statuses
//! - `SubmissionController` - Ties the above into one submit operation

mod controller;
mod draft;
mod payload;
mod relay;
mod revert;
mod status;

pub use controller::*;
pub use draft::*;
pub use payload::*;
pub use relay::*;
pub use revert::*;
pub use status::*;
