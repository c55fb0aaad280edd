use log::{Level, LevelFilter, SetLoggerError};
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;

/// Environment variable used to override the log filters (e.g. `MENDACITY_LOG=debug`)
pub const LOG_ENV_VAR: &str = "MENDACITY_LOG";

#[derive(Debug)]
pub struct Logger;

impl Logger {
    /// Install the global logger, with a max level derived from `verbosity`.
    ///
    /// # Errors
    /// - if a global logger was already installed.
    pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default()
            .filter(LOG_ENV_VAR);

        Builder::new().filter_level(log_level)
            .format(|buf, record| {
                let (traceback, set_intensity) = match record.level() {
                    Level::Error => (
                        format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)),
                        true
                    ),
                    _ => (String::new(), false),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .try_init()
    }

    /// Map the `--quiet` / `-v` command line switches to a verbosity level.
    /// Warnings are still emitted when no `-v` flag was provided.
    pub fn verbosity(quiet: bool, verbose: u8) -> u8 {
        if quiet { 0 } else { verbose.saturating_add(1) }
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }
}
