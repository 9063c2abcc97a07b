//! Test helpers module
//!
//! Shared setup for the integration tests: logging initialization, a
//! temporary translation directory, sample control trees and in-memory
//! stand-ins for the host application.

pub mod simple_test;
pub mod test_data;

pub use simple_test::*;
pub use test_data::*;
