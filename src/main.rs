use clap::Parser;
use ddt_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
