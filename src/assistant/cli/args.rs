use crate::config::HOME_ENV;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assistant", version)]
#[command(about = "Personal assistant: contact book and folder sorter", long_about = None)]
pub struct Cli {
    /// Directory holding the address book, config and logs
    #[arg(long, env = HOME_ENV, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "clean-folder", version)]
#[command(about = "Sort a folder into images, video, documents, audio and archives", long_about = None)]
pub struct CleanFolderCli {
    /// Folder to sort
    pub path: Option<PathBuf>,
}
