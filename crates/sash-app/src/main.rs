mod app;
mod scene;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    // Config first: the log filter directive lives in it. First run
    // creates the default config file.
    let config = sash_config::load_config().unwrap_or_else(|e| {
        eprintln!("config load failed, using defaults: {e}");
        sash_config::schema::SashConfig::default()
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                config
                    .logging
                    .filter
                    .parse()
                    .unwrap_or_else(|_| "sash=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Sash v{} starting...", env!("CARGO_PKG_VERSION"));

    // The reload watcher tasks live on this runtime; it must outlive the
    // event loop.
    let runtime = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    let config_rx = match sash_config::toml_loader::default_config_path() {
        Ok(path) => {
            let (_, rx) = runtime.block_on(sash_config::ReloadManager::start(path));
            Some(rx)
        }
        Err(e) => {
            tracing::warn!("live config reload disabled: {e}");
            None
        }
    };

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::SashApp::new(config, config_rx);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
