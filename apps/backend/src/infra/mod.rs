//! Infrastructure: connection bootstrap, state builder, DbErr translation.

pub mod db;
pub mod db_errors;
pub mod state;
