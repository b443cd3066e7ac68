//! # Parsing de la Request Line HTTP
//! src/http/request.rs
//!
//! Este módulo implementa el parser de la primera línea de un request HTTP.
//! El servidor solo necesita la request line: cualquier header o body que el
//! cliente envíe después de ella se ignora por completo.
//!
//! ## Formato de una Request Line
//!
//! ```text
//! GET /deep/index.html HTTP/1.1\r\n
//! ```
//!
//! Tres tokens separados por espacios: método, path y versión. No validamos
//! el nombre del método ni el formato de la versión en esta etapa; el
//! dispatcher decide qué hacer con métodos distintos de GET.

/// Representa la request line de un request HTTP, ya parseada
///
/// Inmutable una vez construida: se parsea una vez por conexión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Método HTTP tal como llegó en el wire (ej: "GET", "POST")
    method: String,

    /// Path de la petición, con URL-decoding básico (ej: "/mi pagina.html")
    path: String,

    /// Path tal como llegó en el wire, sin decodificar (ej: "/mi%20pagina.html")
    raw_path: String,

    /// Versión HTTP declarada por el cliente (ej: "HTTP/1.1")
    version: String,
}

/// Errores que pueden ocurrir durante el parsing de la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío o sin ningún token en la primera línea
    EmptyRequest,

    /// Request line con menos de 3 tokens (falta path o versión)
    InvalidRequestLine,

    /// El buffer recibido no es UTF-8 válido
    InvalidUtf8,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidUtf8 => write!(f, "Request is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea la request line desde los bytes crudos de la conexión
    ///
    /// Toma la primera línea del buffer (hasta el primer salto de línea),
    /// la separa por espacios en blanco y se queda con los tres primeros
    /// tokens. Todo lo que venga después de la primera línea se descarta.
    ///
    /// # Retorna
    ///
    /// * `Ok(Request)` - Request line parseada exitosamente
    /// * `Err(ParseError)` - Buffer vacío, no-UTF-8 o con menos de 3 tokens
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use servidor_estatico::http::Request;
    ///
    /// let raw = b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/index.html");
    /// assert_eq!(request.version(), "HTTP/1.1");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Convertir a string (validando que sea UTF-8 válido)
        let request_str = std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidUtf8)?;

        let request_str = request_str.trim_start();
        if request_str.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Primera línea = request line; el resto (headers, body) se ignora
        let request_line = request_str.lines().next().ok_or(ParseError::EmptyRequest)?;

        let words: Vec<&str> = request_line.split_whitespace().collect();

        if words.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        // Con 1 o 2 tokens no hay request válido que armar
        if words.len() < 3 {
            return Err(ParseError::InvalidRequestLine);
        }

        Ok(Request {
            method: words[0].to_string(),
            path: Self::url_decode(words[1]),
            raw_path: words[1].to_string(),
            version: words[2].to_string(),
        })
    }

    /// Decodifica una URL (convierte %20 a espacio)
    ///
    /// Implementación básica - puede mejorarse con una librería
    fn url_decode(s: &str) -> String {
        // Por ahora solo manejamos %20 (espacio)
        // En una implementación completa usaríamos percent-encoding crate
        s.replace("%20", " ")
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Verifica si el request usa el método GET (el único soportado)
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }

    /// Obtiene el path del request, ya decodificado
    ///
    /// Este es el path que se usa para resolver archivos en disco.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene el path sin decodificar, tal como llegó en el wire
    ///
    /// Es el que hay que usar para reconstruir URLs (ej: el header
    /// `Location` de una redirección): un path con `%20` debe volver al
    /// cliente con `%20`, no con un espacio crudo.
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Obtiene la versión HTTP declarada por el cliente
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_get() {
        let raw = b"GET / HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert!(request.is_get());
        assert_eq!(request.path(), "/");
        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_parse_with_path() {
        let raw = b"GET /deep/index.html HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/deep/index.html");
    }

    #[test]
    fn test_parse_non_get_method() {
        // POST se parsea bien; rechazarlo es trabajo del dispatcher, no del parser
        let raw = b"POST /form HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "POST");
        assert!(!request.is_get());
    }

    #[test]
    fn test_parse_ignores_headers_and_body() {
        let raw = b"GET /base.css HTTP/1.1\r\nHost: localhost:8080\r\nUser-Agent: curl\r\n\r\nbody";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/base.css");
    }

    #[test]
    fn test_parse_extra_tokens_takes_first_three() {
        let raw = b"GET /a HTTP/1.1 extra tokens\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/a");
        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_url_decode_path() {
        let raw = b"GET /mi%20pagina.html HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.path(), "/mi pagina.html");
    }

    #[test]
    fn test_raw_path_keeps_wire_encoding() {
        let raw = b"GET /mi%20pagina.html HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.raw_path(), "/mi%20pagina.html");
    }

    #[test]
    fn test_raw_path_equals_path_when_unencoded() {
        let raw = b"GET /deep/index.html HTTP/1.1\r\n\r\n";
        let request = Request::parse(raw).unwrap();

        assert_eq!(request.raw_path(), request.path());
    }

    #[test]
    fn test_empty_request() {
        let raw = b"";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn test_whitespace_only_request() {
        let raw = b"   \r\n\r\n";
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::EmptyRequest)));
    }

    #[test]
    fn test_one_token_request_line() {
        let raw = b"GET\r\n\r\n"; // Falta path y versión
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
    }

    #[test]
    fn test_two_token_request_line() {
        let raw = b"GET /index.html\r\n\r\n"; // Falta versión
        let result = Request::parse(raw);

        assert!(matches!(result, Err(ParseError::InvalidRequestLine)));
    }

    #[test]
    fn test_invalid_utf8() {
        let raw = [0xFF, 0xFE, 0x00, 0x01];
        let result = Request::parse(&raw);

        assert!(matches!(result, Err(ParseError::InvalidUtf8)));
    }
}
