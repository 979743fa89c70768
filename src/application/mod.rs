//! Application layer: one handler per operation, wired to ports.

pub mod assistant;
