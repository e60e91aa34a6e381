//! The evensplit CLI tool

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use env_logger::{Builder, Target};
use evensplit::InputError;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "evensplit", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// File containing the test cases. Reads stdin if omitted or `-`.
    input: Option<PathBuf>,
}

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("could not read {}: {source}", display_source(.path))]
    Read {
        path: Option<PathBuf>,
        source: io::Error,
    },
    #[error("could not write results: {0}")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

fn display_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    }
}

fn main() {
    let args = Cli::parse();

    // stdout carries the results, so logs go to stderr.
    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| {
            let level = buf.default_styled_level(record.level());
            writeln!(buf, "{level} {}", record.args())
        })
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return;
    }

    if let Err(error) = run(args.input.as_deref()) {
        report(&error);
        process::exit(1);
    }
}

#[allow(clippy::print_stderr)]
fn report(error: &Error) {
    eprintln!("error: {error}");
}

fn run(input: Option<&Path>) -> Result<(), Error> {
    let input = input.filter(|path| *path != Path::new("-"));
    let text = read_input(input).map_err(|source| Error::Read {
        path: input.map(Path::to_path_buf),
        source,
    })?;

    let output = evensplit::run(&text)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(Error::Write)
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
