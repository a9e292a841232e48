pub mod logger;

pub use logger::{init_from_env, LogLevel, Logger, LoggerConfig};
