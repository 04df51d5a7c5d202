use std::process::exit;

use clap::{
    arg,
    ArgMatches,
    command
};
use tiny_lexer::{
    tokenize,
    Lexer,
    LexerResult,
    lexer::Scanner,
    source::SourceBuffer
};
use tiny_token::{Token, TokenType};
use tracing_subscriber::filter::LevelFilter;

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the fmt subscriber; `log` records from the lexer crates are
/// forwarded to it.
fn init_logger(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn command() -> ArgMatches {
    command!()
        .arg(arg!(--file <VALUE> "source file to scan").short('f').required(true))
        .arg(arg!(--dump_lexer "print every token").short('l'))
        .arg(arg!(--expect <KINDS> "token types the stream must start with, separated by spaces").short('e'))
        .arg(arg!(-v --verbose ... "raise the log level"))
        .get_matches()
}

fn parse_kinds(kinds: &str) -> Vec<TokenType> {
    kinds
        .split_whitespace()
        .map(|name| match name.parse::<TokenType>() {
            Ok(kind) => kind,
            Err(e) => {
                log::error!("{}", e);
                exit(2);
            }
        })
        .collect()
}

/// Drives the consumption gate over `expected`, the way a parser would.
fn check_expected(source: &SourceBuffer, expected: &[TokenType]) -> LexerResult<Token> {
    let mut scanner = Scanner::new(source);
    let mut current = scanner.next_token()?;

    for kind in expected {
        scanner.consume_token(kind, &mut current)?;
    }

    Ok(current)
}

fn execute_scanner(args: ArgMatches) -> LexerResult<()> {
    let file_path = args.get_one::<String>("file").expect("--file is required");
    let source = SourceBuffer::from_file(file_path)?;

    let tokens = tokenize(&source)?;
    let unknown = tokens.iter().filter(|t| t.kind == TokenType::Unknown).count();
    log::info!("{} tokens, {} unknown", tokens.len(), unknown);

    if args.get_flag("dump_lexer") {
        for token in &tokens {
            println!("{}", token);
        }
    }

    if let Some(kinds) = args.get_one::<String>("expect") {
        let expected = parse_kinds(kinds);
        let next = check_expected(&source, &expected)?;
        println!("accepted {} tokens, next is {}", expected.len(), next.kind);
    }

    Ok(())
}

fn main() {
    let args = command();
    init_logger(args.get_count("verbose"));

    if let Err(e) = execute_scanner(args) {
        log::error!("{}", e);
        exit(1);
    }
}
