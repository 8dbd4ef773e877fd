//! Application services: orchestration between routes and repositories.

pub mod games;
