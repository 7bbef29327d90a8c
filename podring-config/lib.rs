pub use self::config::{APP_NAME, APP_VERSION, Config, OutputFormat};
pub use self::errors::ConfigError;
pub use self::persistable::{Persistable, load_or_create_default};

mod config;
mod errors;
mod persistable;
