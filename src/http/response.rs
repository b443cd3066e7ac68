//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! Este módulo proporciona una API para construir respuestas HTTP de forma
//! programática y convertirlas a bytes para enviar al cliente.
//!
//! ## Formato en el wire
//!
//! El servidor emite un formato fijo que NO es el estándar HTTP/1.1:
//!
//! ```text
//! HTTP/1.1 200 OK\n
//! Content-Type: text/html\n
//! \n
//! <body>
//! ```
//!
//! Es decir: `\n` simple tras la status line, y `\n\n` tras **cada** header
//! (no una sola línea en blanco tras el último). Los consumidores existentes
//! dependen de estos bytes exactos; no "corregir".
//!
//! ## Ejemplo de uso
//!
//! ```
//! use servidor_estatico::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/html")
//!     .with_body("<html></html>");
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 301, 404, 405)
    status: StatusCode,

    /// Headers HTTP en orden de inserción
    /// Usamos Vec en lugar de HashMap porque el orden de emisión importa
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (las redirecciones 301 no llevan)
    body: Option<String>,
}

impl Response {
    /// Crea una nueva respuesta con el código de estado especificado
    ///
    /// Por defecto, la respuesta no tiene headers ni body.
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Agrega un header a la respuesta (versión builder)
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/css");
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el cuerpo de la respuesta
    ///
    /// No se emite `Content-Length`; la respuesta termina al cerrar la conexión.
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_body("Hello World");
    /// ```
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato de wire del servidor:
    /// - Status line: `HTTP/1.1 200 OK\n`
    /// - Cada header: `Header-Name: Value\n\n`
    /// - Body: texto tal cual, pegado al `\n\n` del último header
    ///
    /// Todo el texto ensamblado se codifica como UTF-8 al final.
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok)
    ///     .with_header("Content-Type", "text/html")
    ///     .with_body("Hello");
    ///
    /// let bytes = response.to_bytes();
    /// assert_eq!(bytes, b"HTTP/1.1 200 OK\nContent-Type: text/html\n\nHello");
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        // 1. Status line
        let mut response = format!(
            "HTTP/1.1 {} {}\n",
            self.status.as_u16(),
            self.status.reason_phrase()
        );

        // 2. Headers, cada uno con doble terminador
        for (name, value) in &self.headers {
            response.push_str(&format!("{}: {}\n\n", name, value));
        }

        // 3. Body (si existe)
        if let Some(body) = &self.body {
            response.push_str(body);
        }

        response.into_bytes()
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el valor de un header, si fue agregado
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia a los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
