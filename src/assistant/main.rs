use assistant::api::AssistantApi;
use assistant::cli::args::Cli;
use assistant::cli::print::write_result;
use assistant::cli::{run_repl, ReplOptions};
use assistant::config::{resolve_home, AssistantConfig};
use assistant::error::Result;
use assistant::logging::init_logging;
use assistant::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use std::io;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = resolve_home(cli.home)?;
    std::fs::create_dir_all(&home)?;

    let config = AssistantConfig::load(&home)?;
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    if let Err(e) = init_logging(level, &home.join("logs")) {
        eprintln!("{}", format!("Warning: logging disabled: {}", e).yellow());
    }

    let store = FileStore::new(home).with_file_name(&config.book_file);
    let (api, loaded) = AssistantApi::open(store);
    let mut api = api.with_page_size(config.page_size);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &loaded)?;

    let options = ReplOptions {
        upcoming_days: config.upcoming_days,
        ..ReplOptions::default()
    };
    run_repl(&mut api, &options, io::stdin().lock(), &mut out)?;
    Ok(())
}
