mod app;
mod section;
mod style;
mod subscription;
mod theme;
mod thumbnail_cache;
mod toast;
mod widgets;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use folio_core::catalog::Catalog;
use folio_core::config::{AppConfig, LoggingConfig};
use folio_core::error::FolioError;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Designer portfolio as a native window")]
struct Cli {
    /// Read settings from this file instead of the user config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Load projects from this TOML catalog instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("folio: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = init_logging(&config.logging);

    let catalog = match load_catalog(cli.catalog.or_else(|| config.catalog.path.clone())) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Could not load the project catalog");
            return ExitCode::FAILURE;
        }
    };
    catalog.warn_duplicate_ids();

    match run(config, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Window closed with an error");
            ExitCode::FAILURE
        }
    }
}

fn run(config: AppConfig, catalog: Catalog) -> iced::Result {
    let win = iced::window::Settings {
        size: iced::Size::new(config.window.width, config.window.height),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        move || app::Folio::new(&config, catalog.clone()),
        app::Folio::update,
        app::Folio::view,
    )
    .title(app::Folio::title)
    .subscription(app::Folio::subscription)
    .theme(app::Folio::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(win)
    .run()
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog, FolioError> {
    match path {
        Some(path) => Catalog::load(&path),
        None => Ok(Catalog::builtin()),
    }
}

/// Console logging, plus a daily file under the data dir when enabled.
///
/// `RUST_LOG` wins over the configured filter. The returned guard flushes
/// the file writer and must live until exit.
fn init_logging(logging: &LoggingConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let (file_layer, guard) = if logging.file {
        let appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "folio.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_load_catalog_missing_file_is_an_error() {
        assert!(load_catalog(Some(PathBuf::from("/nonexistent/folio-catalog.toml"))).is_err());
    }
}
