//! Shelf library exports

pub mod catalog;
pub mod cli;
pub mod core;
pub mod screens;
pub mod store;

#[cfg(test)]
pub mod test_support;
