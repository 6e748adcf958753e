//! `tagged list` command implementation.

use clap::{Args, ValueEnum};
use tagged_config::CliSettings;
use tagged_markup::{Element, HtmlFactory};

use super::{CommonArgs, factory};
use crate::error::CliError;
use crate::output::Output;

/// Kind of list to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ListKind {
    /// Unordered `ul > li` list.
    #[default]
    Ul,
    /// Ordered `ol > li` list.
    Ol,
    /// Definition list; items are key=value pairs.
    Dl,
    /// Delimited inline list.
    Inline,
}

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// List items (key=value pairs for `--kind dl`).
    items: Vec<String>,

    /// Kind of list to render.
    #[arg(short, long, value_enum, default_value_t)]
    kind: ListKind,

    /// Maximum visible inline items; 0 shows only the overflow count (overrides config).
    #[arg(short, long)]
    limit: Option<usize>,

    /// Inline item separator (overrides config).
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Separator before the last inline item (overrides config).
    #[arg(long)]
    final_delimiter: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if a definition item is malformed or configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.kind != ListKind::Inline
            && (self.limit.is_some() || self.delimiter.is_some() || self.final_delimiter.is_some())
        {
            output.warning("--limit and delimiter options only apply to --kind inline");
        }

        let settings = CliSettings {
            delimiter: self.delimiter.clone(),
            final_delimiter: self.final_delimiter.clone(),
            limit: self.limit,
            ..CliSettings::default()
        };
        let config = self.common.load_config(settings)?;
        let html = factory(&config);

        let list = self.build(&html)?;
        let markup = list.render(config.render.pretty)?;

        if markup.is_empty() {
            output.warning("No items to render");
        } else {
            output.result(markup.as_str());
        }
        Ok(())
    }

    fn build(&self, html: &HtmlFactory) -> Result<Element, CliError> {
        let items = self.items.iter().map(String::as_str);

        let list = match self.kind {
            ListKind::Ul => html.ulist(Some(items), None)?,
            ListKind::Ol => html.olist(Some(items), None)?,
            ListKind::Inline => html.ilist(Some(items))?,
            ListKind::Dl => {
                let pairs = self
                    .items
                    .iter()
                    .map(|item| {
                        item.split_once('=').ok_or_else(|| {
                            CliError::Validation(format!(
                                "definition items must be key=value, got '{item}'"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                html.dlist(Some(pairs), None)?
            }
        };

        tracing::info!(kind = ?self.kind, items = self.items.len(), "Rendered list");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tagged_markup::{FactoryOptions, InlineListOptions};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ListArgs,
    }

    fn parse(argv: &[&str]) -> ListArgs {
        TestCli::try_parse_from(std::iter::once("list").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_list_defaults_to_ul() {
        let args = parse(&["a", "b"]);
        assert_eq!(args.kind, ListKind::Ul);
        let html = HtmlFactory::default();
        assert_eq!(
            args.build(&html).unwrap().to_string(),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_ordered() {
        let html = HtmlFactory::default();
        let el = parse(&["--kind", "ol", "x"]).build(&html).unwrap();
        assert_eq!(el.to_string(), "<ol><li>x</li></ol>");
    }

    #[test]
    fn test_list_definition_pairs() {
        let html = HtmlFactory::default();
        let el = parse(&["--kind", "dl", "name=Ada", "born=1815"])
            .build(&html)
            .unwrap();
        assert_eq!(
            el.to_string(),
            "<dl><dt>name</dt><dd>Ada</dd><dt>born</dt><dd>1815</dd></dl>"
        );
    }

    #[test]
    fn test_list_definition_rejects_bare_item() {
        let html = HtmlFactory::default();
        let err = parse(&["--kind", "dl", "oops"]).build(&html).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_list_inline_uses_factory_options() {
        let html = HtmlFactory::new(FactoryOptions {
            inline_list: InlineListOptions::default()
                .with_final_delimiter(" and ")
                .with_limit(2),
            ..FactoryOptions::default()
        });
        let el = parse(&["--kind", "inline", "a", "b", "c"])
            .build(&html)
            .unwrap();
        assert_eq!(
            el.to_string(),
            r#"<span class="list"><span>a</span> and <span>b</span>, <em class="more">…+ 1</em></span>"#
        );
    }

    #[test]
    fn test_list_empty() {
        let html = HtmlFactory::default();
        assert_eq!(parse(&[]).build(&html).unwrap().to_string(), "");
    }
}
