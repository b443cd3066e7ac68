//! # Servidor Estático
//! src/lib.rs
//!
//! Servidor HTTP/1.1 de archivos estáticos (HTML y CSS) implementado desde
//! cero, pensado como ejemplo didáctico de parsing de requests y
//! construcción de respuestas HTTP.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: request line, responses y status codes
//! - `resolver`: mapeo de paths HTTP a paths del filesystem y guard de
//!   seguridad contra path traversal
//! - `handler`: el dispatcher que decide 200/301/404/405
//! - `server`: transporte TCP y manejo de conexiones
//! - `config`: configuración por CLI y variables de entorno
//! - `logger`: inicialización del logging
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use servidor_estatico::config::Config;
//! use servidor_estatico::handler::StaticHandler;
//! use servidor_estatico::server::Server;
//!
//! let config = Config::default();
//! let handler = StaticHandler::new(config.clone()).expect("cwd inaccesible");
//! let server = Server::new(config, handler);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resolver;
pub mod server;
