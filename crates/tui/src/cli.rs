use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "session-config-tester", version)]
#[command(about = "Browse example browser-session configs and copy them as validated JSON")]
pub struct Cli {
    /// Print the catalog and exit
    #[arg(long, conflicts_with_all = ["print", "copy"])]
    pub list: bool,

    /// Print the validated JSON of the named entry and exit
    #[arg(long, value_name = "NAME", conflicts_with = "copy")]
    pub print: Option<String>,

    /// Copy the validated JSON of the named entry to the clipboard and exit
    #[arg(long, value_name = "NAME")]
    pub copy: Option<String>,

    /// Generate predictable session ids instead of random ones
    #[arg(long)]
    pub fixed_ids: bool,

    /// Append logs to this file (filter with SESSION_TESTER_LOG)
    #[arg(long, value_name = "PATH", env = "SESSION_TESTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    List,
    Print(String),
    Copy(String),
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            return Mode::List;
        }
        if let Some(name) = &self.print {
            return Mode::Print(name.clone());
        }
        if let Some(name) = &self.copy {
            return Mode::Copy(name.clone());
        }
        Mode::Interactive
    }
}
