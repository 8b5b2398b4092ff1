//! Domain core for the mock warehouse load API.
//!
//! Everything in this crate is synchronous and free of I/O: the job registry
//! is plain in-memory storage, and status derivation is a pure function of
//! (job record, current time). The HTTP layer in `snowmock-api` is the only
//! consumer.

pub mod command;
pub mod quality;
pub mod registry;
pub mod status;
pub mod types;
