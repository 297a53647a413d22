use crate::config::{Config, DEFAULT_STORAGE_PATH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Interactive contact book")]
pub struct Cli {
    /// JSON file holding the contact book
    #[arg(long, short, default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Log debug events to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.file.clone())
    }
}
