use clap::Parser;
use std::{io::stdout, path::PathBuf, process::ExitCode};

use rulegen::{logging, transpile_file};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar definition file with one rule per line
    #[arg(value_name = "GRAMMAR")]
    grammar: PathBuf,
    
    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Invalid log filter: {}", e);
        return ExitCode::FAILURE;
    }
    
    match transpile_file(&args.grammar, stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(grammar = %args.grammar.display(), "Aborting");
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
