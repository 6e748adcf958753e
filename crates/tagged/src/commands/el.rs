//! `tagged el` command implementation.

use clap::Args;
use tagged_config::CliSettings;
use tagged_markup::{Attributes, Content, Element, HtmlFactory};

use super::{CommonArgs, factory, parse_key_value};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the el command.
#[derive(Args)]
pub(crate) struct ElArgs {
    /// Element name, e.g. `div.card#main` or `ul > li`.
    name: String,

    /// Text content; words are joined with spaces.
    content: Vec<String>,

    /// Attribute to set, as key=value (repeatable).
    #[arg(short, long = "attr", value_parser = parse_key_value)]
    attributes: Vec<(String, String)>,

    /// Insert content as markup instead of escaping it.
    #[arg(long)]
    raw: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ElArgs {
    /// Execute the el command.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or configuration fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;
        let html = factory(&config);

        let element = self.build(&html)?;
        let markup = element.render(config.render.pretty)?;

        if markup.is_empty() {
            output.warning("Element rendered empty");
        } else {
            output.result(markup.as_str());
        }
        Ok(())
    }

    fn build(&self, html: &HtmlFactory) -> Result<Element, CliError> {
        let attributes: Attributes = self
            .attributes
            .iter()
            .map(|(key, value)| (key, value.as_str()))
            .collect();

        let content = if self.content.is_empty() {
            Content::Null
        } else if self.raw {
            html.raw(self.content.join(" ")).into()
        } else {
            self.content.join(" ").into()
        };

        Ok(html.el(&self.name, content, Some(&attributes))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ElArgs,
    }

    fn build(argv: &[&str]) -> String {
        let cli = TestCli::try_parse_from(std::iter::once("el").chain(argv.iter().copied()))
            .unwrap();
        cli.args
            .build(&HtmlFactory::default())
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_el_shorthand_and_content() {
        assert_eq!(
            build(&["p.lead", "Hello", "<world>"]),
            r#"<p class="lead">Hello &lt;world&gt;</p>"#
        );
    }

    #[test]
    fn test_el_attributes_and_nesting() {
        assert_eq!(
            build(&["nav > a", "Home", "--attr", "href=/"]),
            r#"<nav><a href="/">Home</a></nav>"#
        );
    }

    #[test]
    fn test_el_raw_content() {
        assert_eq!(build(&["div", "--raw", "<b>x</b>"]), "<div><b>x</b></div>");
    }

    #[test]
    fn test_el_optional_empty() {
        assert_eq!(build(&["?span"]), "");
    }

    #[test]
    fn test_el_invalid_name() {
        let cli = TestCli::try_parse_from(["el", "1bad"]).unwrap();
        assert!(matches!(
            cli.args.build(&HtmlFactory::default()),
            Err(CliError::Markup(_))
        ));
    }
}
