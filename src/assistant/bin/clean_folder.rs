use assistant::cli::args::CleanFolderCli;
use assistant::cli::print::write_result;
use assistant::commands::clean;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match CleanFolderCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let Some(path) = cli.path else {
        println!("No argument");
        return ExitCode::FAILURE;
    };
    if !path.exists() {
        println!("Does not exist");
        return ExitCode::FAILURE;
    }
    if !path.is_dir() {
        println!("Not a directory");
        return ExitCode::FAILURE;
    }

    let result = match clean::run(&path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            return ExitCode::FAILURE;
        }
    };
    match write_result(&mut io::stdout().lock(), &result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
