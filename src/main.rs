use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser as ClapParser;
use minijs::{
    lexer::lexer::tokenize,
    parser::parser::{ParseOptions, Parser, DEFAULT_MAX_DEPTH},
    render_error,
};

/// minijs parses a source file and prints its syntax tree
#[derive(Debug, ClapParser)]
#[command(name = "minijs", author, version)]
struct MinijsArgs {
    /// Source file to parse
    #[arg()]
    file: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree as JSON
    #[arg(long)]
    json: bool,

    /// Maximum nesting depth of statements and expressions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = MinijsArgs::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let file_contents = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    if args.tokens {
        return match tokenize(file_contents.clone(), Some(file_name)) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{:>6}  {}", token.span.start.0, token.debug());
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                eprint!("{}", render_error(&error, &file_contents));
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let start = Instant::now();
    let mut parser = Parser::new(ParseOptions {
        file: Some(file_name),
        max_depth: args.max_depth,
    });

    let program = match parser.parse(&file_contents) {
        Ok(program) => program,
        Err(error) => {
            tracing::debug!("parse failed after {:?}", start.elapsed());
            eprint!("{}", render_error(&error, &file_contents));
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::info!("parsed in {:?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        println!("{:#?}", program);
    }

    Ok(ExitCode::SUCCESS)
}
