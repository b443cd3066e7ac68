//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Transporte del servidor: acepta conexiones, entrega al handler los bytes
//! recibidos y escribe de vuelta la respuesta. Cada conexión se procesa en
//! su propio thread; el handler no comparte estado mutable (sus tablas son
//! de solo lectura), así que no hace falta sincronización adicional.
//!
//! Contrato por conexión: leer a lo sumo 1024 bytes, producir a lo sumo una
//! respuesta, cerrar. Sin keep-alive, sin reintentos.

use crate::config::Config;
use crate::handler::StaticHandler;
use log::{error, info, warn};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Tamaño máximo de lectura por conexión. Solo interesa la request line;
/// headers o body que no entren en el buffer se descartan igual.
const READ_BUFFER_SIZE: usize = 1024;

/// Servidor HTTP de archivos estáticos
pub struct Server {
    config: Config,
    handler: Arc<StaticHandler>,
}

impl Server {
    /// Crea el servidor con su handler ya configurado
    pub fn new(config: Config, handler: StaticHandler) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }

    /// Bindea el socket y sirve conexiones indefinidamente
    ///
    /// Solo retorna si el bind falla o el accept loop se rompe.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        info!("Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        info!(
            "Servidor escuchando en {} (web root: .{})",
            address, self.config.web_root
        );

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let handler = Arc::clone(&self.handler);
                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, handler) {
                            error!("Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Procesa una conexión completa: leer → parsear → responder → cerrar
    ///
    /// Si la request line está malformada se cierra la conexión sin escribir
    /// respuesta alguna; el error queda solo en el log.
    pub fn handle_connection(
        mut stream: TcpStream,
        handler: Arc<StaticHandler>,
    ) -> std::io::Result<()> {
        let start = Instant::now();

        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            info!("[{}] conexión cerrada sin datos", peer);
            return Ok(());
        }

        let response = match handler.handle(&buffer[..bytes_read]) {
            Ok(response) => response,
            Err(e) => {
                warn!("[{}] request malformado: {} (cierro sin responder)", peer, e);
                return Ok(());
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        info!(
            "[{}] {} ({:.2}ms)",
            peer,
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::net::Shutdown;
    use std::path::PathBuf;

    const INDEX_HTML: &str = "<html><body>inicio</body></html>\n";

    fn setup_web_root(name: &str) -> PathBuf {
        let base = std::env::temp_dir().join(format!(
            "servidor_estatico_tcp_{}_{}",
            name,
            std::process::id()
        ));
        if base.exists() {
            fs::remove_dir_all(&base).unwrap();
        }
        fs::create_dir_all(base.join("www")).unwrap();
        fs::write(base.join("www/index.html"), INDEX_HTML).unwrap();
        base
    }

    fn test_handler(name: &str) -> Arc<StaticHandler> {
        let base = setup_web_root(name);
        Arc::new(StaticHandler::with_base_dir(Config::default(), base))
    }

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    /// Helper: levanta un accept de una sola conexión y manda `request`
    fn roundtrip(handler: Arc<StaticHandler>, request: &[u8]) -> String {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, handler).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(request).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();

        t.join().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_handle_connection_serves_file() {
        let text = roundtrip(
            test_handler("serves_file"),
            b"GET /index.html HTTP/1.1\r\n\r\n",
        );

        assert!(text.starts_with("HTTP/1.1 200 OK\n"));
        assert!(text.contains("Content-Type: text/html\n\n"));
        assert!(text.ends_with(INDEX_HTML));
    }

    #[test]
    fn test_handle_connection_post_gets_405() {
        let text = roundtrip(test_handler("post_405"), b"POST / HTTP/1.1\r\n\r\n");

        assert!(text.starts_with("HTTP/1.1 405 405 Method Not Allowed\n"));
        assert!(text.contains("405 Method Not Allowed</body>"));
    }

    #[test]
    fn test_handle_connection_missing_gets_404() {
        let text = roundtrip(
            test_handler("missing_404"),
            b"GET /fantasma.html HTTP/1.1\r\n\r\n",
        );

        assert!(text.starts_with("HTTP/1.1 404 404 Not Found\n"));
    }

    #[test]
    fn test_handle_connection_malformed_closes_without_response() {
        // Request line con un solo token: se cierra sin escribir nada
        let text = roundtrip(test_handler("malformed"), b"GET\r\n\r\n");

        assert!(text.is_empty());
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        // Cubre la rama bytes_read == 0
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let handler = test_handler("peer_closed");

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, handler).unwrap();
        });

        // Cliente que conecta y cierra inmediatamente sin mandar datos
        drop(TcpStream::connect(addr).unwrap());

        t.join().unwrap();
    }
}
