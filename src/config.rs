//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos estáticos
//! con soporte para argumentos CLI y variables de entorno.
//!
//! Host, puerto y web root no son constantes globales: viajan en una
//! estructura explícita que se pasa al handler al construirlo, lo que
//! permite levantar varias instancias configuradas de forma independiente
//! (útil en tests).
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./servidor_estatico --port 8080 --web-root /www
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 HTTP_HOST=localhost ./servidor_estatico
//! ```

use clap::Parser;

/// Configuración del servidor HTTP de archivos estáticos
#[derive(Debug, Clone, Parser)]
#[command(name = "servidor_estatico")]
#[command(about = "Servidor HTTP/1.1 de archivos estáticos para Principios de Sistemas Operativos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8080", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "localhost", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio de archivos servibles, relativo al directorio de trabajo.
    /// Debe empezar con '/'
    #[arg(long = "web-root", default_value = "/www", env = "WEB_ROOT")]
    pub web_root: String,

    /// Nivel de logging (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use servidor_estatico::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "localhost:8080");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Obtiene la URL base del servidor, usada para armar redirecciones
    ///
    /// # Ejemplo
    /// ```rust
    /// use servidor_estatico::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.base_url(), "http://localhost:8080");
    /// ```
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }

        // El web root se concatena literalmente tras el directorio base,
        // así que necesita la barra inicial
        if !self.web_root.starts_with('/') {
            return Err("Web root must start with '/'".to_string());
        }
        if self.web_root == "/" {
            return Err("Web root must name a subdirectory, not '/'".to_string());
        }

        match self.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(format!("Unknown log level: {}", other));
            }
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════╗");
        println!("║   Servidor Estático HTTP/1.1         ║");
        println!("╚══════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:   {}", self.address());
        println!("   Base URL:  {}", self.base_url());
        println!();
        println!("📁 Files:");
        println!("   Web root:  .{}  (relativo al cwd)", self.web_root);
        println!("   MIME:      text/html, text/css");
        println!();
        println!("═════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto: localhost:8080 sirviendo ./www
    fn default() -> Self {
        Self {
            port: 8080,
            host: "localhost".to_string(),
            web_root: "/www".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.web_root, "/www");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_address() {
        let config = Config::default();
        assert_eq!(config.address(), "localhost:8080");
    }

    #[test]
    fn test_address_custom() {
        let mut config = Config::default();
        config.host = "0.0.0.0".to_string();
        config.port = 3000;
        assert_eq!(config.address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_validate_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = String::new();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Host"));
    }

    #[test]
    fn test_validate_web_root_without_slash() {
        let mut config = Config::default();
        config.web_root = "www".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Web root"));
    }

    #[test]
    fn test_validate_web_root_bare_slash() {
        let mut config = Config::default();
        config.web_root = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unknown_log_level() {
        let mut config = Config::default();
        config.log_level = "verboso".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("log level"));
    }

    #[test]
    fn test_config_print_summary() {
        let config = Config::default();
        // Should not panic
        config.print_summary();
    }
}
