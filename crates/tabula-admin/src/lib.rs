//! # tabula-admin
//!
//! The presentation boundary of the tabula schema engine: parses raw
//! form/JSON fields into [`tabula_schema::request::MutationRequest`]
//! values, wraps [`tabula_schema::request::MutationResult`] into the
//! `{success, message|error}` JSON envelope the AJAX layer expects, and
//! keeps the per-request feedback log the page drains after each render
//! cycle. HTML rendering itself lives elsewhere; this crate only prepares
//! the data.
//!
//! The `tabula-admin` binary exposes the same operations on the command
//! line.

pub mod action;
pub mod envelope;
pub mod error;
pub mod feedback;
pub mod views;

pub use action::parse_request;
pub use envelope::JsonEnvelope;
pub use error::{AdminError, Result};
pub use feedback::MessageLog;
pub use views::{overview, SchemaOverview, TableOverview};
