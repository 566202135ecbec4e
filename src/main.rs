//! doxydoc — print the doxygen template for the declaration after a `/**`.
//!
//! - **stdin mode**: `doxydoc < widget.h`
//! - **file mode**: `doxydoc -l 42 -f plain src/widget.h`

use anyhow::{bail, Context, Result};
use clap::Parser;
use doxydoc::config::Config;
use doxydoc::model::CommentStyle;
use doxydoc::render;
use doxydoc::source::{generate, Buffer};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doxydoc",
    about = "Generate doxygen comment templates for C/C++ declarations"
)]
struct Cli {
    /// Input file. If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// 1-based line of the `/**` opener (default: the first bare opener)
    #[arg(short = 'l', long)]
    line: Option<usize>,

    /// Command prefix: @ (javadoc) or \ (qt). Overrides the settings file.
    #[arg(short = 's', long)]
    style: Option<String>,

    /// Lines joined after a declaration's first line. Overrides the settings file.
    #[arg(short = 'm', long)]
    max_lines: Option<usize>,

    /// JSON settings file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format: snippet (default), plain, json
    #[arg(short = 'f', long, default_value = "snippet")]
    format: String,

    /// Log classifier and tokenizer decisions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let renderer = render::create_renderer(&cli.format)?;
    let config = resolve_config(&cli)?;
    let input = read_input(&cli)?;
    let buffer = Buffer::new(&input);

    let opener = match cli.line {
        Some(0) => bail!("line numbers start at 1"),
        Some(n) => n - 1,
        None => buffer
            .first_opener()
            .context("no documentation comment opener found")?,
    };

    if let Some(template) = generate(&buffer, opener, &config) {
        print!("{}", renderer.render(&template));
    }
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let directive = if verbose { "doxydoc=debug" } else { "doxydoc=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Settings file (if any) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(ref style) = cli.style {
        config.comment_style = CommentStyle::parse(style)
            .with_context(|| format!("unknown style: {}. Use @ or \\", style))?;
    }
    if let Some(max_lines) = cli.max_lines {
        config.max_lines = max_lines;
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> Result<String> {
    match cli.file {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
