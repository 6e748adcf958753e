//! CLI command implementations.

pub(crate) mod el;
pub(crate) mod list;
pub(crate) mod preview;

use std::path::PathBuf;

use clap::Args;
use tagged_config::{CliSettings, Config};
use tagged_markup::{FactoryOptions, HtmlFactory, InlineListOptions};

use crate::error::CliError;

pub(crate) use el::ElArgs;
pub(crate) use list::ListArgs;
pub(crate) use preview::PreviewArgs;

/// Flags shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover tagged.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Indent block children on their own lines (overrides config).
    #[arg(long)]
    pretty: bool,
}

impl CommonArgs {
    /// Load configuration, applying the shared flags over `settings`.
    pub(crate) fn load_config(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            pretty: self.pretty.then_some(true).or(settings.pretty),
            ..settings
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

/// Build factory defaults from loaded configuration.
pub(crate) fn factory_options(config: &Config) -> FactoryOptions {
    FactoryOptions {
        inline_list: InlineListOptions {
            delimiter: config.list.delimiter.clone(),
            final_delimiter: config.list.final_delimiter.clone(),
            limit: config.list.limit,
            more_text: config.list.more_text.clone(),
        },
        preview_max_length: config.preview.max_length,
        ellipsis: config.preview.ellipsis.clone(),
    }
}

/// Create a factory configured from `config`.
pub(crate) fn factory(config: &Config) -> HtmlFactory {
    HtmlFactory::new(factory_options(config))
}

/// Parse a `key=value` argument.
pub(crate) fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))
}
