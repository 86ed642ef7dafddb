mod settings;

pub use settings::{BindingConfig, EngineConfig, LogFormat, LoggingConfig, Settings};
