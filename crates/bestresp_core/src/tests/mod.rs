//! Scenario tests for the best-response sweep
//!
//! Tests are organized by topic:
//! - `scenarios` - Fixed input scenarios with known answers
//! - `properties` - Grid, bounds, ordering and accuracy properties

mod scenarios;
