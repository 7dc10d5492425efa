//! Subgraph transport and query execution

pub mod client;

pub use client::*;
