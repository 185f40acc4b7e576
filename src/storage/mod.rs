//! Storage implementations of the transaction query engine

pub mod in_memory;

pub use in_memory::InMemoryQueryEngine;
