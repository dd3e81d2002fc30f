//! Nested mapping integration tests
//!
//! Tests are organized by concern: the NestedDict adapter, object conversion,
//! JSON interop, and the algebraic laws checked with proptest.

mod fields_tests;
mod serialization_tests;
