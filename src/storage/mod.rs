//! Filesystem persistence for data that outlives a wizard session.

pub mod json_store;

pub use json_store::JsonOptionStore;
