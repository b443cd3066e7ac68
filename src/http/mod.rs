//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Este módulo implementa la porción de HTTP/1.1 que el servidor necesita,
//! sin librerías de alto nivel:
//!
//! - Parsing de la request line (lo único del request que se lee)
//! - Construcción de responses
//! - Manejo de status codes
//!
//! ### Formato de Request (solo se usa la primera línea)
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response (convención propia, no estándar)
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/html\n
//! \n
//! <html>...</html>
//! ```

pub mod request; // Parsing de la request line
pub mod response; // Construcción de HTTP responses
pub mod status; // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
// Esto permite usar `http::Request` en vez de `http::request::Request`
pub use request::{ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
