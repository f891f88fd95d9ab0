//! Typed client for the remote content API.
//!
//! Every page of the site reads its live content through this crate: one
//! operation per page type, each issuing a single locale-tagged request and
//! normalizing every failure into [`ContentResult::Failure`]. Errors never
//! escape the fetch boundary; the rendering layer branches on the result and
//! falls back to static content.

pub mod client;
pub mod error;
pub mod ops;
pub mod result;
pub mod types;

pub use client::CmsClient;
pub use error::CmsError;
pub use ops::{LocaleHeader, PageOp};
pub use result::ContentResult;
