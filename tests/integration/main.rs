//! Integration test suite.
//!
//! These tests exercise the full router against a real PostgreSQL
//! instance configured by `tests/fixtures/test_config.toml`, and are
//! ignored by default so the suite runs without a database.

mod helpers;
mod property_test;
mod search_test;
