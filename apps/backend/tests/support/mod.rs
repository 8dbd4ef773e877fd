#![allow(dead_code)] // each test binary uses a different subset of helpers

pub mod app_builder;
pub mod logging;
pub mod problem_details;

pub use app_builder::{init_app, test_state};
pub use problem_details::assert_problem_details;

// Auto-initialize logging for integration tests
#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}
