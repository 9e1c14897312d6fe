//! Client side of the responder boundary
//!
//! The controller talks to the external responder through the
//! [`crate::runtime::Responder`] trait; [`HttpResponder`] is the production
//! implementation against `POST /api/chat`.

mod error;
mod http;

pub use error::{
    ResponderError, CONNECTION_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE,
};
pub use http::HttpResponder;
