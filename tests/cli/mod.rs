//! End-to-end tests of the cmdrun binary.

pub mod binary_test;
