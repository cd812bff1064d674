use clap::Parser;

use storefront::app::settings::{save_settings_to, user_cache_dir};
use storefront::runner::logging::init_logging;
use storefront::runner::{run_app, Cli};
use storefront::ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;

    if cli.init_config {
        let path = cli.config_path()?;
        save_settings_to(&settings, &path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // Logging is best-effort: without a cache directory the app still runs.
    let _log_guard = match user_cache_dir() {
        Ok(dir) => Some(init_logging(&dir, &cli.log_level)?),
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            None
        }
    };

    ui::colors::set_theme(&settings.theme);
    run_app(settings).await
}
