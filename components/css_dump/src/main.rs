use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser as _;
use css_parser::Parser;
use css_tokenizer::{ParseError, Tokenizer};
use tracing_subscriber::EnvFilter;

/// Dumps the tokens or component values of a CSS file.
#[derive(Debug, clap::Parser)]
#[command(name = "css_dump")]
struct Args {
    /// Path to the stylesheet.
    path: PathBuf,

    /// Print the token stream instead of the component values.
    #[arg(long)]
    tokens: bool,

    /// Only print parse errors.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let file = match File::open(&args.path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Failed to open '{}': {}", args.path.display(), error);
            return ExitCode::FAILURE;
        }
    };
    let tokenizer = Tokenizer::new(BufReader::new(file));

    tracing::info!(path = %args.path.display(), "started parsing");
    let before = Instant::now();
    let result = match args.tokens {
        true => dump_tokens(tokenizer, args.quiet),
        false => dump_component_values(tokenizer, args.quiet),
    };
    tracing::info!(elapsed = ?before.elapsed(), "finished parsing");

    match result {
        Ok(parse_errors) => {
            for error in &parse_errors {
                eprintln!("\x1b[31m[Parse error] {}\x1b[0m", error);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("\x1b[31m[Fatal error] {}\x1b[0m", error);
            ExitCode::FAILURE
        }
    }
}

fn dump_tokens(
    mut tokenizer: Tokenizer<BufReader<File>>,
    quiet: bool,
) -> Result<Vec<ParseError>, Box<dyn std::error::Error>> {
    if !quiet {
        println!("---- CSS Tokens ----");
    }

    for token in tokenizer.by_ref() {
        let token = token?;
        if !quiet {
            println!("{}", token);
        }
    }

    Ok(tokenizer.take_parse_errors())
}

fn dump_component_values(
    tokenizer: Tokenizer<BufReader<File>>,
    quiet: bool,
) -> Result<Vec<ParseError>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(tokenizer);
    let values = parser.parse_a_list_of_component_values()?;

    if !quiet {
        println!("---- CSS Component Values ----");
        for value in &values {
            println!("{}", value);
        }
    }

    Ok(parser.take_parse_errors())
}
