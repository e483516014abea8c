//! Scenario tests for the processing pipeline and legend loader.
//!
//! These drive the async code with `pollster` against in-memory fakes of the
//! backend, the gallery and the user's files.

mod pipeline_tests;
