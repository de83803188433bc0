use chrono::Local;
use eyre::Result;
use fern::Dispatch;

/// Configures console logging for binaries, tests, and benches embedding
/// the library.
///
/// The level comes from the `RUST_LOG` environment variable and defaults
/// to `Info`. Messages carry a timestamp, level, and target, so the
/// library's `entities::pair` derivation lines are attributable.
///
/// # Returns
/// * `Result<()>` - Success or failure of logger setup
///
/// # Errors
/// * If a global logger is already installed
pub fn setup_logger() -> Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
