use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser as ClapParser;
use mscript::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::{tokenize, Lexer},
    parser::parser::Parser,
};

/// Parse an mscript source file and print its syntax tree.
#[derive(ClapParser, Debug)]
#[command(name = "mscript", version)]
struct Args {
    /// Source file to parse. Reads stdin when absent or `-`.
    file: Option<PathBuf>,

    /// Print every token before parsing
    #[arg(long)]
    tokens: bool,

    /// Print how long each phase took
    #[arg(long)]
    timings: bool,
}

fn read_source(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn display_error(error: &Error, file: &str) {
    /*
        Error: NoPrefixParseFn (`)` cannot start an expression)
        -> main.ms
           | no prefix parse function for ) found
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file);
    println!("   | {}", error);
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file_name = match &args.file {
        Some(path) if path.as_os_str() != "-" => path.to_string_lossy().into_owned(),
        _ => String::from("<stdin>"),
    };

    let source = match read_source(args.file.as_ref()) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_name, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if args.tokens {
        for token in tokenize(source.as_str()) {
            println!("{}", token.debug());
        }

        if args.timings {
            println!("Tokenized in {:?}", start.elapsed());
        }
    }

    let parse_start = Instant::now();
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if args.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    println!("{}", program);

    for error in parser.errors() {
        display_error(error, &file_name);
    }

    if args.timings {
        println!("Total time: {:?}", start.elapsed());
    }

    if parser.errors().is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
