//! Builds API documentation out of the HTTP traffic a test suite already
//! generates. Bodies are captured without consuming them for the code under
//! test, exchanges are grouped into actions, and each action renders to a
//! markdown fragment through a fixed template set.

mod action;
mod capture;
mod data;
mod error;
mod metadata;
mod template;
mod util;

pub use action::Action;
pub use capture::{capture_request, capture_response, clone_body};
pub use data::{Request, Response};
pub use error::Error;
pub use metadata::{MetadataResolver, NoopResolver};
pub use template::TemplateSet;
pub use util::{comma_join, indent_json, JoinArg};
