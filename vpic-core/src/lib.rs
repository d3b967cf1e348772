//! Core library for the `vpic` CLI.
//!
//! This crate defines:
//! - A typed client for the NHTSA vPIC vehicle API (decode VIN, makes, models)
//! - The mapping from the API's attribute/value records to [`Vehicle`]
//! - Configuration handling
//!
//! It is used by `vpic-cli`, but can also be reused by other binaries or services.

pub mod cancel;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod service;
pub mod transport;
pub mod vocabulary;

pub use cancel::until_cancelled;
pub use config::Config;
pub use error::{Result, TransportError, VpicError};
pub use model::{ModelsRequest, Vehicle, VehicleType};
pub use service::{ServiceBuilder, VpicService};
pub use transport::{HttpResponse, HttpTransport, Transport};
