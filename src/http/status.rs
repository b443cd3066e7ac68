//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Este módulo define los códigos de estado que usa el servidor de archivos
//! estáticos. Solo manejamos cuatro casos:
//!
//! - **200**: archivo servido con éxito
//! - **301**: redirección a directorio con barra final
//! - **404**: recurso inexistente (o fuera del web root)
//! - **405**: método distinto de GET
//!
//! Las reason phrases de 301/404/405 incluyen el propio código numérico
//! (`"404 Not Found"`, no `"Not Found"`). Es el formato exacto que emite
//! el servidor en el wire y los tests lo verifican literal.

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - El archivo se sirvió correctamente
    Ok = 200,

    /// 301 Moved Permanently - Directorio pedido sin barra final
    MovedPermanently = 301,

    /// 404 Not Found - Ruta inexistente o fuera del web root
    NotFound = 404,

    /// 405 Method Not Allowed - Cualquier método distinto de GET
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Construye un `StatusCode` a partir de su valor numérico
    ///
    /// Retorna `None` para códigos fuera del conjunto soportado.
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::StatusCode;
    /// assert_eq!(StatusCode::from_u16(404), Some(StatusCode::NotFound));
    /// assert_eq!(StatusCode::from_u16(500), None);
    /// ```
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            301 => Some(StatusCode::MovedPermanently),
            404 => Some(StatusCode::NotFound),
            405 => Some(StatusCode::MethodNotAllowed),
            _ => None,
        }
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// Ojo: salvo el 200, los textos incluyen el código numérico. Es el
    /// formato literal que el servidor escribe en la status line.
    ///
    /// # Ejemplo
    /// ```
    /// use servidor_estatico::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "404 Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "301 Moved Permanently",
            StatusCode::NotFound => "404 Not Found",
            StatusCode::MethodNotAllowed => "405 Method Not Allowed",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Verifica si el código indica error del cliente (4xx)
    pub fn is_client_error(&self) -> bool {
        let code = self.as_u16();
        (400..500).contains(&code)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formatea el código de estado para mostrarlo
    ///
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
