use std::io::Read;

use rpsl::toolchain;
use rpsl::toolchain::diagnostics::DiagnosticConsumer;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
    rpslc - lex an RPSL object and print its tokens

    USAGE:
        rpslc [--quiet] [--verbose] FILENAME

    OPTIONS:
        --quiet             If present, the token listing is suppressed, only diagnostics are
                            printed.
        --verbose           Log lexer progress at debug level. RUST_LOG overrides either level.

    ARGS:
        FILENAME            The path to the RPSL file to lex, or supply '-' to take input from
                            stdin.

    Exits with status 1 if the object is malformed or the file cannot be read.
";

#[derive(Debug, Eq, PartialEq)]
struct RpslcArgs {
    quiet: bool,
    verbose: bool,
    source_file: std::path::PathBuf,
}

fn main() {
    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut stdin_text = String::new();
    let source = if args.source_file.as_os_str() == "-" {
        if let Err(e) = std::io::stdin().read_to_string(&mut stdin_text) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        toolchain::source::SourceBuffer::new_from_string(&stdin_text, "<stdin>")
    } else {
        match toolchain::source::SourceBuffer::new_from_file(&args.source_file) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error opening source file {}: {}", args.source_file.display(), e);
                std::process::exit(1);
            }
        }
    };
    debug!(file_name = source.file_name(), bytes = source.code().len(), "lexing");

    let mut diags = toolchain::diagnostics::console_diagnostic_consumer();
    let tb = toolchain::lexer::TokenizedBuffer::tokenize(&source, &mut diags);
    diags.flush();

    if !args.quiet {
        println!("TokenizedBuffer [");
        tb.print_tokens();
        println!("]");
    }

    info!(
        tokens = tb.tokens().len(),
        has_error = tb.has_error(),
        "lexed {}",
        tb.source().file_name()
    );
    if tb.has_error() {
        std::process::exit(1);
    }
}

fn parse_args() -> Result<RpslcArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = RpslcArgs {
        quiet: pargs.contains("--quiet"),
        verbose: pargs.contains("--verbose"),
        source_file: pargs.free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unused arguments left: {:?}.", remaining);
        std::process::exit(1);
    }
    Ok(args)
}
