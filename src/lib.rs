pub mod api;
pub mod completion;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod prompts;

pub use completion::ArticleGenerator;
pub use config::AppConfig;
pub use error::{GenerationError, InputError};

/// Installs the fmt subscriber used by both binaries. `RUST_LOG` overrides
/// the `info` default.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
