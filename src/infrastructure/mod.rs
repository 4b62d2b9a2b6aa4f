//! Infrastructure layer for platform and environment interactions.

pub mod paths;

pub use paths::{default_config_file, default_data_dir, APP_DIR_NAME};
