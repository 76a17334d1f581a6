//! Attribute-value seal/unseal operations and their primitives.
//!
//! Submodules follow the pipeline order: [`derive`] turns the session
//! key and confounder into a stream key, [`keystream`] applies the
//! cipher, [`checksum`] wraps and verifies the integrity envelope, and
//! [`seal`] composes them (plus the RID block transform from
//! [`crate::rid_key`]) into the two mutually inverse wire operations.

pub mod checksum;
pub mod derive;
pub mod error;
pub mod keystream;
pub mod seal;

pub use derive::{StreamKey, derive_stream_key};
pub use error::{Result, SealError};
pub use seal::{
    seal_attribute, seal_value, seal_value_with_confounder, unseal_attribute, unseal_value,
};
