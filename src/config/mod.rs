// Config layer - environment bootstrap and logging setup
pub mod bootstrap_settings;
pub mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use logging::{init_logging, LoggingConfig, LoggingError};
