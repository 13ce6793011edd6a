mod app;
mod cli;
mod image;
mod observer;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // Config is read before logging so `logging.level` can seed the filter.
    let config_result = profilekit_config::load_config(args.config.as_deref());
    let mut config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => profilekit_config::ProfileKitConfig::default(),
    };
    apply_overrides(&mut config, &args);
    if args.print_config {
        println!("{}", profilekit_config::config_to_json(&config));
        return;
    }

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "profilekit=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("ProfileKit v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &config_result {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let url = config.page.url.clone();

    let profile_image = match &args.profile_image {
        Some(path) => match image::encode_image_file(path) {
            Ok(encoded) => {
                tracing::info!(path = %path.display(), bytes = encoded.len(), "profile image loaded");
                Some(encoded)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read profile image");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app::HostApp::new(config, url, profile_image);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

/// Fold command-line overrides into the loaded config.
fn apply_overrides(config: &mut profilekit_config::ProfileKitConfig, args: &cli::Args) {
    if let Some(url) = &args.url {
        config.page.url = url.clone();
    }
    if args.inspect {
        config.webview.inspectable = true;
    }
}
