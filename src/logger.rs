//! # Logging
//! src/logger.rs
//!
//! Inicialización del logger de terminal. El nivel se toma de la
//! configuración (`--log-level` / `LOG_LEVEL`).

use crate::config::Config;

use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

/// Inicializa el logger global según la configuración
///
/// Debe llamarse una sola vez, al arrancar el proceso.
pub fn init_logger(cfg: &Config) -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        parse_level(&cfg.log_level),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

fn parse_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        // Config::validate ya rechaza niveles desconocidos
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_values() {
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("info"), LevelFilter::Info);
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("trace"), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_level_unknown_falls_back_to_info() {
        assert_eq!(parse_level("verboso"), LevelFilter::Info);
    }
}
