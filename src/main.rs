use std::fs;
use std::process::ExitCode;

mod options;

use glife::{PlainText, engine};

fn main() -> ExitCode {
    let Some(args) = options::Args::from_env() else {
        return ExitCode::from(2);
    };

    let text = match fs::read_to_string(args.input_file()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: could not open '{}': {err}", args.input_file());
            return ExitCode::from(2);
        }
    };

    let mut board = match PlainText::decode(&text) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Could not read the board file: {err}");
            return ExitCode::from(1);
        }
    };

    println!("Seed board:");
    print!("{board}");

    for generation in 1..=args.generations() {
        if let Err(err) = engine::advance(&mut board) {
            eprintln!("Error while advancing to the next generation: {err}");
            return ExitCode::from(1);
        }
        println!("\nGeneration {generation}:");
        print!("{board}");
    }

    ExitCode::SUCCESS
}
