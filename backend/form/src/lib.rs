//! # Feedback Form
//!
//! Client side of the classroom feedback form.
//!
//! ## Questions
//! 1. Three most important points learned, 3 inputs
//! 2. Two most interesting points, 2 inputs
//! 3. The one hardest question, 1 input
//!
//! Each input is required and capped at 100 characters. The submit control stays disabled until all
//! six pass, and while a submission is in flight.
//!
//! ## Submission
//! - Assemble the payload, POST it as JSON to `<base_url>/api/submit-feedback`
//! - Show a loading notification while waiting
//! - 2xx: show the `message` of the response (or a default), clear every input
//! - otherwise: show the `detail` of the response (or a default), keep every input
//! - No retries, no timeout, the user submits again by hand
//!
//! ## Configuration
//! - `FEEDBACK_API_URL`: base URL of the endpoint, default `http://127.0.0.1:8008`
//! - `RUST_LOG`: tracing filter
//!
//! ```sh
//! feedback-form --important closures --important traits --important lifetimes \
//!     --interesting async --interesting macros --difficult "pinning"
//! ```
//!
//! Answers left out on the command line are asked for interactively.
pub mod client;
pub mod config;
pub mod field;
pub mod notify;
pub mod prompt;
pub mod questions;
pub mod state;
pub mod toast;

pub use client::{SubmitClient, SubmitError};
pub use notify::{Notification, NotificationKind};
pub use questions::FieldId;
pub use state::{FeedbackForm, FormError, Phase};
