use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

use rulegen::{logging, parse_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the parsed lines of a grammar definition as JSON", long_about = None)]
struct Args {
    #[arg(value_name = "GRAMMAR")]
    grammar: PathBuf,
    
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Invalid log filter: {}", e);
        return ExitCode::FAILURE;
    }
    
    let lines = match parse_file(&args.grammar) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };
    
    match serde_json::to_string_pretty(&lines) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Could not serialize grammar: {}", e);
            ExitCode::FAILURE
        },
    }
}
