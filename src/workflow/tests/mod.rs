//! Unit tests for the workflow core.

mod service_tests;
