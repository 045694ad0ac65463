//! Scenario tests for manifest loading
//!
//! These tests write real XML property lists to disk and run them through the
//! full load path, checking the index and summaries end to end.
