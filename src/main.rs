//! recipe-grid CLI entry point.
//!
//! Reads the steps payload from a file or stdin and the ingredient catalog
//! from a second file, then prints the rendered fragment (or just one half
//! of it) to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use recipe_grid::{recipe, render_recipe};

/// Recipe step graph to CSS grid flow output.
#[derive(Parser, Debug)]
#[command(
    name = "recipe-grid",
    about = "Recipe step graph to CSS grid flow output"
)]
struct Cli {
    /// Steps JSON file (reads from stdin if not provided)
    steps: Option<String>,

    /// Ingredient catalog JSON file (empty catalog if not provided)
    #[arg(short = 'i', long = "ingredients")]
    ingredients: Option<String>,

    /// Emit only the stylesheet fragment
    #[arg(long = "css-only", conflicts_with = "html_only")]
    css_only: bool,

    /// Emit only the markup fragment
    #[arg(long = "html-only")]
    html_only: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let steps_text = match read_input(cli.steps.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read steps: {e}");
            process::exit(1);
        }
    };
    let ingredients_text = match cli.ingredients.as_deref() {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{path}': {e}");
                process::exit(1);
            }
        },
        None => "[]".to_string(),
    };

    let rendered = recipe::parse_steps(&steps_text)
        .and_then(|steps| {
            let ingredients = recipe::parse_ingredients(&ingredients_text)?;
            render_recipe(&steps, &ingredients)
        })
        .unwrap_or_else(|e| {
            eprintln!("error: {e}");
            process::exit(1);
        });

    let out = if cli.css_only {
        rendered.css
    } else if cli.html_only {
        rendered.html
    } else {
        rendered.fragment()
    };
    tracing::debug!(bytes = out.len(), "fragment rendered");

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, out) {
            eprintln!("error: cannot write '{path}': {e}");
            process::exit(1);
        }
    } else {
        print!("{out}");
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {e}");
            process::exit(1);
        }
    }
}
