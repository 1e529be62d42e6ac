//! Document storage for the comparison service.
//!
//! Clients submit the two documents of a comparison separately, each under a
//! shared identifier, as Base64-encoded JSON. This crate keeps them until a
//! diff is requested and decodes them on demand.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] trait:
//!
//! - [`InMemoryDocumentStore`] -- `HashMap`-based store shared by all requests

pub mod codec;
pub mod error;
pub mod memory;
pub mod side;
pub mod traits;

pub use codec::{decode_document, encode_document, parse_document};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryDocumentStore;
pub use side::Side;
pub use traits::DocumentStore;
