//! Command-line entry logic.

use std::io::Write;

use anyhow::{Context, bail};

use shopsmart_catalog::{SortKey, seed_catalog};
use shopsmart_session::BrowseState;

use crate::render::{ConsoleRenderer, RenderSink};

/// Parsed command-line options. All default to "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub text: String,
    pub category: String,
    pub sort: String,
}

impl Options {
    /// Parse `--text`, `--category` and `--sort` flags. Unknown flags are
    /// rejected; an unknown *sort token* is not (it degrades to catalog
    /// order downstream).
    pub fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = Self::default();
        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("missing value for {flag}"))
            };
            match flag.as_str() {
                "--text" => options.text = value()?,
                "--category" => options.category = value()?,
                "--sort" => options.sort = value()?,
                other => bail!("unknown flag: {other}"),
            }
        }
        Ok(options)
    }
}

/// Evaluate the query described by `options` against the seeded catalog and
/// render the result to `out`.
pub fn run<W: Write>(options: &Options, out: &mut W) -> anyhow::Result<()> {
    let catalog = seed_catalog().context("building seed catalog")?;

    let mut browse = BrowseState::new();
    browse.submit_search(&options.text, &options.category);
    browse.set_sort(SortKey::parse(&options.sort));

    let view = browse.results(&catalog);
    tracing::info!(
        total = catalog.len(),
        matched = view.len(),
        title = browse.title().as_str(),
        "catalog query evaluated"
    );

    let mut renderer = ConsoleRenderer::new(out);
    renderer.render_view(&browse.title(), &view)?;
    Ok(())
}
