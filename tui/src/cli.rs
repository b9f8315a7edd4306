use std::path::PathBuf;

use admin_core::Route;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "admin-console", version, about = "Terminal admin console")]
pub struct Cli {
    /// Directory endpoint returning the JSON list of users.
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to a config file. Defaults to `<home>/config.toml`.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Console home holding preferences and logs.
    #[arg(long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Screen shown at startup.
    #[arg(long = "route", value_name = "ROUTE", default_value_t = Route::Dashboard)]
    pub route: Route,
}
