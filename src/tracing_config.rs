//! Logging for the `binname` driver.
//!
//! Off unless `BINNAME_LOG` or `RUST_LOG` holds a filter directive.
//! `BINNAME_LOG_FORMAT=tree` nests events under their program and unit
//! spans, `json` emits one object per line. Everything goes to stderr so
//! stdout stays a clean report.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "BINNAME_LOG";
const LOG_FORMAT_VAR: &str = "BINNAME_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directive and output format resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when logging is off. `BINNAME_LOG` wins over `RUST_LOG`.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directive = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG"))?;
        let format = lookup(LOG_FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or(LogFormat::Text);
        Some(LogSettings { directive, format })
    }
}

pub fn init_tracing() {
    let Some(settings) = LogSettings::resolve(|var| std::env::var(var).ok()) else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(&settings.directive);

    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
