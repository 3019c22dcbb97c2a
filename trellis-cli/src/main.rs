//! trellis CLI
//!
//! Parses an HTML-like template, optionally fills in its `{{placeholders}}`,
//! and prints the result as markup, as a tree outline, or as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use trellis_common::warning::set_quiet;
use trellis_dom::{Node, print_tree, serialize};
use trellis_html::{DEFAULT_MAX_DEPTH, ParseOptions, parse_with_options};
use trellis_template::{Params, render};

/// trellis — parse, fill in and re-serialize HTML-like templates
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Normalize a document
    trellis page.html

    # Fill in placeholders
    trellis page.html -p title=Home -p user=Ada

    # Placeholders from a JSON object
    trellis page.html --params values.json

    # Inspect the parsed tree
    trellis --tree --html '<ul><li>one<li>two</ul>'
"#)]
struct Cli {
    /// Path to the template file
    #[arg(value_name = "FILE", required_unless_present = "html", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse this markup string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Template parameter; may be repeated
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// JSON object of template parameters (-p entries take precedence)
    #[arg(long = "params", value_name = "FILE")]
    params_file: Option<PathBuf>,

    /// Print an indented tree outline instead of markup
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print the tree as JSON instead of markup
    #[arg(long)]
    json: bool,

    /// Maximum element nesting depth
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Do not report recovered markup problems on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let document = build_document(&cli)?;
    if cli.tree {
        for root in document.children() {
            print_tree(root, 0);
        }
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", serialize(&document));
    }
    Ok(())
}

/// Parse the input and render it with the given parameters
fn build_document(cli: &Cli) -> Result<Node> {
    let source = read_input(cli)?;
    let params = load_params(cli)?;

    let options = ParseOptions::default().with_max_depth(cli.max_depth);
    let forest = parse_with_options(&source, &options).context("failed to parse input")?;
    let template: Node = forest.into_iter().collect();
    if params.is_empty() {
        Ok(template)
    } else {
        Ok(render(&template, &params))
    }
}

/// Read the template from `--html` or the positional path
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        bail!("a FILE or --html is required")
    }
}

/// Merge `--params` and `-p` into one map
fn load_params(cli: &Cli) -> Result<Params> {
    let mut params = Params::new();
    if let Some(ref path) = cli.params_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        params = serde_json::from_str(&raw).with_context(|| {
            format!("{} must be a JSON object of string values", path.display())
        })?;
    }
    params.extend(cli.params.iter().cloned());
    Ok(params)
}

/// Split `key=value` at the first `=`
fn parse_param(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))
}
