//! Engine module: CLI surface, reporting and filesystem helpers

pub mod arg_parser;
pub mod handlers;
pub mod report;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use report::{format_total, to_gib, to_mib};
pub use tools::{check_root_exists, check_roots_exist, regular_file_size};
