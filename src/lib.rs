//! Blocktris (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `blocktris::{core,input,store,term,types}` and hosts the pieces the binary
//! wires together: command-line config, logging setup and the play session.

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_store as store;
pub use blocktris_term as term;
pub use blocktris_types as types;

pub mod config;
pub mod logging;
pub mod session;
