//! Terminal front end for the admin console: login stub, dashboard, users
//! directory with intake, and the settings form.

use std::sync::Arc;

use admin_core::ConfigOverrides;
use admin_core::ConsoleConfig;
use admin_core::FilePreferenceStore;
use admin_directory_client::DirectoryClient;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use color_eyre::eyre::eyre;
use tracing::info;

mod app;
mod app_event;
mod app_event_sender;
mod cli;
mod dashboard_view;
mod hint_bar;
mod logging;
mod login_view;
mod render;
mod settings_view;
mod text_input;
mod theme;
mod tui;
mod users_view;

pub use cli::Cli;

use crate::app::App;
use crate::app::AppServices;

pub async fn run_main(cli: Cli) -> Result<()> {
    color_eyre::install()?;

    let config = ConsoleConfig::load(ConfigOverrides {
        home: cli.home,
        config_path: cli.config,
        directory_url: cli.endpoint,
    })
    .wrap_err("failed to load console configuration")?;

    let _log_guard = logging::init_file_logging(&config.log_dir()).map_err(|err| eyre!("{err:#}"))?;
    info!(
        home = %config.home.display(),
        directory_url = %config.directory_url,
        "starting admin console"
    );

    let directory = DirectoryClient::new(config.client_options())
        .wrap_err("failed to build directory client")?;
    let services = AppServices {
        directory: Arc::new(directory),
        preferences: Arc::new(FilePreferenceStore::new(&config.home)),
        collation_locale: config.collation_locale.clone(),
    };

    let mut terminal = tui::init().wrap_err("failed to initialise terminal")?;
    let result = App::run(&mut terminal, services, cli.route).await;
    tui::restore().wrap_err("failed to restore terminal")?;
    info!("admin console exited");
    result
}
