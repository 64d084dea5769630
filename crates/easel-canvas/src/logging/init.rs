use std::sync::Once;

static INIT: Once = Once::new();

/// Logger configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `env_logger` filter string, e.g. "easel_canvas=debug,wgpu_core=warn".
    /// When unset, `RUST_LOG` applies; without that either, the level
    /// defaults to info with the GPU stack quieted to warnings.
    pub env_filter: Option<String>,
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
        }
    }
}

/// Initializes the global logger once; later calls are ignored. Call early
/// in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter {
            Some(spec) => {
                builder.parse_filters(&spec);
            }
            None => {
                builder
                    .filter_level(log::LevelFilter::Info)
                    .filter_module("wgpu_core", log::LevelFilter::Warn)
                    .filter_module("wgpu_hal", log::LevelFilter::Warn)
                    .filter_module("naga", log::LevelFilter::Warn);
            }
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
