//! Services layer
//!
//! Everything that touches the filesystem lives here, keeping the model
//! and components free of IO.

pub mod data;

pub use data::load_blog;
