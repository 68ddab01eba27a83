use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_loom_config::Config;
use markdown_loom_engine::{
    Document, ParseOptions, Theme, io, parse_with_options, parsing::snapshot, render_html,
    render_page,
};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

const DEFAULT_TITLE: &str = "Document";

#[derive(Parser, Debug)]
#[command(name = "markdown-loom", version, about = "Convert Markdown to HTML")]
struct Cli {
    /// Markdown file to convert; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet for the page: plain, light or dark
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Emit only the rendered body, without the page wrapper
    #[arg(long)]
    fragment: bool,

    /// Lines of lookahead available to the block parser (1-10)
    #[arg(long)]
    lookahead: Option<usize>,

    /// Indentation that continues a list item
    #[arg(long)]
    indent_width: Option<usize>,

    /// Alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging and a dump of the block tree
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let debug = cli.debug || config.debug;
    env_logger::Builder::from_default_env()
        .filter_level(if debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let theme = match cli.theme {
        Some(theme) => theme,
        None => config.theme().context("Invalid theme in config file")?,
    };
    let options = parse_options(&cli, &config);
    log::debug!("parse options: {options:?}, theme: {theme}");

    let doc = read_document(cli.input.as_deref(), &options)?;
    if debug {
        log::debug!("block tree:\n{}", snapshot::outline(&doc));
    }

    let html = if cli.fragment {
        render_html(&doc)
    } else {
        let title = cli
            .input
            .as_deref()
            .and_then(Path::file_stem)
            .map_or(DEFAULT_TITLE.into(), |stem| stem.to_string_lossy());
        render_page(&doc, theme, &title)
    };

    let target = cli.output.clone().or_else(|| {
        let input = cli.input.as_deref()?;
        let dir = config.output_dir.as_deref()?;
        Some(io::html_path_for(input, Some(dir)))
    });
    match target {
        Some(path) => {
            io::write_file(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// The explicit `--config` file must exist; the default one is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

/// Command-line flags win over the config file.
fn parse_options(cli: &Cli, config: &Config) -> ParseOptions {
    let mut options = config.parse_options();
    if let Some(lookahead) = cli.lookahead {
        options.lookahead = lookahead;
    }
    if let Some(width) = cli.indent_width {
        options.indent_width = width.max(1);
    }
    options
}

fn read_document(input: Option<&Path>, options: &ParseOptions) -> Result<Document> {
    match input {
        Some(path) => io::parse_file(path, options)
            .with_context(|| format!("Failed to convert {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(parse_with_options(&text, options)?)
        }
    }
}
