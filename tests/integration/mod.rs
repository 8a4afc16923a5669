//! Library integration tests for cmdrun.

pub mod config_test;
pub mod dispatch_test;
pub mod logger_test;
