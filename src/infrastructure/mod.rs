//! Adapters implementing the domain storage ports.

pub mod in_memory;
