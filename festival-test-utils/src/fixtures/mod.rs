//! Database fixtures used during test execution.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a fixture
//! helper which inserts rows with standard test values.

pub mod coupon;
pub mod credit;
pub mod event;
pub mod pass;
pub mod user;
