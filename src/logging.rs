use std::fs::OpenOptions;

use crate::config::LoggingSettings;

/// Install the global logger.
///
/// Records go to `logging.file` only; stderr would corrupt the alternate
/// screen. Without a file nothing is installed and `log` macros are no-ops.
pub fn init(settings: &LoggingSettings) -> std::io::Result<bool> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format_timestamp_millis()
    .try_init()
    .is_ok();

    Ok(installed)
}
