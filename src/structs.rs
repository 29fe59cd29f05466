use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "db-injector", author, version, about = "Insert timestamp into database", long_about = None)]
pub struct Cli {
    /// mysql, postgres, mongodb
    #[arg(short = 't', long = "type")]
    pub provider: Option<String>,
    /// Database endpoint (host[:port])
    #[arg(short, long)]
    pub endpoint: Option<String>,
    /// Name of the database, it can be multiple, separated by comma
    #[arg(short, long)]
    pub database: Option<String>,
    #[arg(short, long)]
    pub username: Option<String>,
    #[arg(short, long)]
    pub password: Option<String>,
    /// Number of loops to execute, 0 runs until stopped
    #[arg(short = 'c', long = "count")]
    pub count: Option<u64>,
    /// Overwrite old table data
    #[arg(short, long, action = ArgAction::Set)]
    pub overwrite: Option<bool>,
    /// Table or collection receiving the rows
    #[arg(long)]
    pub table: Option<String>,
    /// Pause between cycles in milliseconds
    #[arg(long)]
    pub interval: Option<u64>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Read settings from this TOML file before applying flags
    #[arg(long)]
    pub config: Option<String>,
    /// Write a config.toml template (or the --config path) and exit.
    #[arg(long)]
    pub create_config: bool,
    /// Only check that every database is reachable.
    #[arg(long)]
    pub check: bool,
}
