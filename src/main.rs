use std::{fs, path::{Path, PathBuf}, process, rc::Rc};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use semanalyzer::{display_error, lexer::lexer::tokenize, parser::parser::parse, type_checker::type_checker::type_check};

/// Tokenize, parse and type check a single source file
#[derive(Parser, Debug)]
#[command(name = "semanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Front end and semantic analyzer for a small typed language")]
struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the token stream before checking
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree before checking
    #[arg(long)]
    ast: bool,
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(2);
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let tokens = tokenize(&source, Some(file_name.clone()));
    if cli.tokens {
        for token in tokens.iter() {
            println!("{}", token);
        }
    }

    let outcome = parse(tokens, Rc::new(file_name.clone())).and_then(|ast| {
        if cli.ast {
            println!("{:#?}", ast);
        }
        type_check(&ast).map(|_| ())
    });

    if let Err(error) = outcome {
        display_error(&error, &source);
        process::exit(1);
    }

    info!("{} checked successfully", file_name);
}
