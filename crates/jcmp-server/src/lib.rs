//! HTTP API for the JSON comparison service.
//!
//! Clients post the left and right documents of a comparison under a shared
//! identifier, then ask for the diff of that identifier.
//!
//! | Method | Path                   | Effect                               |
//! |--------|------------------------|--------------------------------------|
//! | POST   | `/v1/diff/{id}/left`   | store the left Base64 document       |
//! | POST   | `/v1/diff/{id}/right`  | store the right Base64 document      |
//! | POST   | `/v1/diff/{id}`        | decode both documents and compare    |
//! | DELETE | `/v1/diff/{id}`        | drop both documents                  |
//! | GET    | `/v1/health`           | liveness                             |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::DiffServer;
