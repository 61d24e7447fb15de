//! subboard_core - domain logic for the subboard substitution monitor client.

pub mod monitor;
