//! `tagged preview` command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tagged_config::CliSettings;
use tagged_markup::HtmlFactory;

use super::{CommonArgs, factory};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// Markup file to read (default: stdin).
    file: Option<PathBuf>,

    /// Characters to keep before truncating (overrides config).
    #[arg(short, long)]
    max_length: Option<usize>,

    /// Print an `abbr` markup preview instead of plain text.
    #[arg(long)]
    markup: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl PreviewArgs {
    /// Execute the preview command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let settings = CliSettings {
            max_length: self.max_length,
            ..CliSettings::default()
        };
        let config = self.common.load_config(settings)?;
        let html = factory(&config);

        let input = match &self.file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Reading markup");
                std::fs::read_to_string(path)?
            }
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        match self.preview(&html, input)? {
            Some(preview) => output.result(&preview),
            None => output.warning("No text content"),
        }
        Ok(())
    }

    fn preview(&self, html: &HtmlFactory, input: String) -> Result<Option<String>, CliError> {
        if self.markup {
            Ok(html.preview(input, None)?.map(|markup| markup.into_string()))
        } else {
            Ok(html.preview_text(input, None)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tagged_markup::FactoryOptions;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: PreviewArgs,
    }

    fn parse(argv: &[&str]) -> PreviewArgs {
        TestCli::try_parse_from(std::iter::once("preview").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    fn factory_with_length(max_length: usize) -> HtmlFactory {
        HtmlFactory::new(FactoryOptions {
            preview_max_length: Some(max_length),
            ..FactoryOptions::default()
        })
    }

    #[test]
    fn test_preview_plain_text() {
        let args = parse(&[]);
        let preview = args
            .preview(&factory_with_length(5), "<p>Hello <b>world</b></p>".to_owned())
            .unwrap();
        assert_eq!(preview, Some("Hello…".to_owned()));
    }

    #[test]
    fn test_preview_markup() {
        let args = parse(&["--markup"]);
        let preview = args
            .preview(&factory_with_length(2), "<p>abc</p>".to_owned())
            .unwrap();
        assert_eq!(
            preview,
            Some(r#"<abbr title="abc">ab</abbr><span class="suffix">…</span>"#.to_owned())
        );
    }

    #[test]
    fn test_preview_empty_input() {
        let args = parse(&[]);
        let preview = args
            .preview(&HtmlFactory::default(), "<br>".to_owned())
            .unwrap();
        assert_eq!(preview, None);
    }
}
