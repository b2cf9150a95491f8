mod api;
mod app;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("todolist-tui")
        .version(crate_version!())
        .about("A terminal user interface for a remote to-do list")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Task collection URL for this run")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Show debug messages in the log pane"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    // The override is not written back to the config file
    let api_url = matches
        .value_of("api-url")
        .map(str::to_owned)
        .unwrap_or_else(|| config.api_url.to_owned());

    let log_level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    App::start(config, &api_url, log_level).await
}
