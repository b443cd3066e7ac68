//! # Dispatcher de Archivos Estáticos
//! src/handler/mod.rs
//!
//! Este módulo implementa la lógica central del servidor: recibir los bytes
//! crudos de una conexión y producir exactamente una respuesta HTTP.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → Request::parse → dispatch → Response
//! ```
//!
//! El dispatch evalúa estados en orden de prioridad y cada rama termina en
//! una `Response` concreta. Una rama que no respondiera nada (extensión no
//! soportada, directorio sin index.html) dejaría al cliente colgado, así que
//! esos casos responden 404 explícito.
//!
//! 1. Método distinto de GET → 405
//! 2. Archivo regular dentro del root → 200 (html/css) o 404 (otra extensión)
//! 3. Directorio dentro del root con index.html → 200 o 301 según barra final
//! 4. Todo lo demás (inexistente, fuera del root) → 404

use crate::config::Config;
use crate::http::{ParseError, Request, Response, StatusCode};
use crate::resolver;
use std::io;
use std::path::{Path, PathBuf};

// Páginas de error fijas. Los bytes exactos (salto inicial, indentación y
// espacios finales incluidos) son parte del contrato de compatibilidad, igual
// que el doble terminador de los headers.

/// Página de error fija para respuestas 404
pub const ERROR_404_BODY: &str = "
        <!DOCTYPE html>
        <html>
            <body>HTTP/1.1 404 Not Found</body>
        </html>
    ";

/// Página de error fija para respuestas 405
pub const ERROR_405_BODY: &str = "
        <!DOCTYPE html>
        <html>
            <body>HTTP/1.1 405 Method Not Allowed</body>
        </html>
    ";

/// Tabla MIME fija: extensión de archivo → content-type
///
/// Solo se sirven HTML y CSS; cualquier otra extensión se trata como 404.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => Some("text/css"),
        Some("html") => Some("text/html"),
        _ => None,
    }
}

/// Handler de archivos estáticos
///
/// Contiene la configuración y el directorio base contra el que se resuelven
/// y validan todos los paths. El directorio base es el directorio de trabajo
/// del proceso, salvo que se construya con [`StaticHandler::with_base_dir`]
/// (los tests lo apuntan a un directorio temporal).
pub struct StaticHandler {
    config: Config,
    base_dir: PathBuf,

    /// Forma canónica del base, calculada una vez al construir. `None` si el
    /// base no existe; en ese caso el guard rechaza todo (falla cerrado).
    canonical_base: Option<PathBuf>,
}

impl StaticHandler {
    /// Crea un handler cuyo directorio base es el cwd del proceso
    pub fn new(config: Config) -> io::Result<Self> {
        let base_dir = std::env::current_dir()?;
        Ok(Self::with_base_dir(config, base_dir))
    }

    /// Crea un handler con un directorio base explícito
    pub fn with_base_dir(config: Config, base_dir: PathBuf) -> Self {
        let canonical_base = resolver::canonical_base(&base_dir).ok();
        Self {
            config,
            base_dir,
            canonical_base,
        }
    }

    /// Aplica el guard de seguridad contra el base canónico
    fn is_safe(&self, candidate: &Path) -> bool {
        match &self.canonical_base {
            Some(base) => resolver::is_safe_path(base, candidate),
            None => false,
        }
    }

    /// Maneja los bytes crudos de una conexión
    ///
    /// # Retorna
    ///
    /// * `Ok(Response)` - Siempre que la request line se pudo parsear; toda
    ///   rama del dispatch produce una respuesta
    /// * `Err(ParseError)` - Request line malformada; el transporte debe
    ///   cerrar la conexión sin responder
    pub fn handle(&self, raw: &[u8]) -> Result<Response, ParseError> {
        let request = Request::parse(raw)?;
        Ok(self.dispatch(&request))
    }

    /// Estado de dispatch: produce exactamente una respuesta por request
    pub fn dispatch(&self, request: &Request) -> Response {
        // 1. Solo soportamos GET
        if !request.is_get() {
            return Self::method_not_allowed();
        }

        // La resolución en disco usa el path decodificado
        let candidate = resolver::resolve(&self.base_dir, &self.config.web_root, request.path());

        // 2. Archivo regular dentro del árbol permitido
        if candidate.is_file() && self.is_safe(&candidate) {
            return self.serve_file(&candidate);
        }

        // 3. Directorio dentro del árbol permitido. La redirección se arma
        //    con el path del wire, sin decodificar
        if candidate.is_dir() && self.is_safe(&candidate) {
            return self.serve_directory(&candidate, request.raw_path());
        }

        // 4. Inexistente o fuera del root: indistinguibles a propósito
        Self::not_found()
    }

    /// Sirve un archivo regular ya validado por el guard
    ///
    /// Extensiones fuera de la tabla MIME y archivos ilegibles responden
    /// 404; nunca se deja la conexión sin respuesta.
    fn serve_file(&self, path: &Path) -> Response {
        let mime = match mime_for_path(path) {
            Some(mime) => mime,
            None => return Self::not_found(),
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Response::new(StatusCode::Ok)
                .with_header("Content-Type", mime)
                .with_body(contents),
            Err(_) => Self::not_found(),
        }
    }

    /// Sirve un directorio ya validado por el guard
    ///
    /// Con index.html presente: 200 si el path pedido termina en `/`,
    /// 301 a la URL con barra final si no. Sin index.html: 404.
    ///
    /// `raw_path` es el path sin decodificar: lo que el cliente mandó es lo
    /// que vuelve en el `Location`.
    fn serve_directory(&self, dir: &Path, raw_path: &str) -> Response {
        let index = dir.join("index.html");
        if !index.is_file() {
            return Self::not_found();
        }

        if raw_path.ends_with('/') {
            match std::fs::read_to_string(&index) {
                Ok(contents) => Response::new(StatusCode::Ok)
                    .with_header("Content-Type", "text/html")
                    .with_body(contents),
                Err(_) => Self::not_found(),
            }
        } else {
            let redirect_url = format!("{}{}/", self.config.base_url(), raw_path);
            Response::new(StatusCode::MovedPermanently).with_header("Location", &redirect_url)
        }
    }

    /// Respuesta 404 fija
    fn not_found() -> Response {
        Response::new(StatusCode::NotFound)
            .with_header("Content-Type", "text/html")
            .with_body(ERROR_404_BODY)
    }

    /// Respuesta 405 fija
    fn method_not_allowed() -> Response {
        Response::new(StatusCode::MethodNotAllowed)
            .with_header("Content-Type", "text/html")
            .with_body(ERROR_405_BODY)
    }

    /// Obtiene el directorio base del handler
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
