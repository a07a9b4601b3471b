use std::fs;
use std::io::{self, Read};

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use terse_core::translate;

/// Translate Terse configuration documents to YAML.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Read the document from this file instead of standard input
    #[arg(short, long)]
    input: Option<String>,

    /// Path to the output YAML file
    #[arg(short, long)]
    output: String,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read input file {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .into_diagnostic()
                .wrap_err("failed to read standard input")?;
            buffer
        }
    };

    let result = translate(&source)?;
    let yaml = result.to_yaml().into_diagnostic()?;

    // The output file is only touched once translation has fully succeeded.
    fs::write(&cli.output, yaml)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write output file {}", cli.output))?;

    println!("Successfully converted to YAML. Output written to {}", cli.output);
    Ok(())
}
