//! Unit tests for moveable.

mod snapshot_tests;
