//! # Servidor Estático - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor de archivos estáticos.

use log::error;
use servidor_estatico::config::Config;
use servidor_estatico::handler::StaticHandler;
use servidor_estatico::logger;
use servidor_estatico::server::Server;

fn main() {
    println!("=================================");
    println!("  Servidor Estático HTTP/1.1");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    // Configuración desde CLI / variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = logger::init_logger(&config) {
        eprintln!("💥 No se pudo inicializar el logger: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // El handler resuelve paths contra el directorio de trabajo actual
    let handler = match StaticHandler::new(config.clone()) {
        Ok(handler) => handler,
        Err(e) => {
            error!("No se pudo determinar el directorio de trabajo: {}", e);
            std::process::exit(1);
        }
    };

    // Iniciar el servidor (esto bloqueará el thread)
    let server = Server::new(config, handler);
    if let Err(e) = server.run() {
        error!("Error fatal: {}", e);
        std::process::exit(1);
    }
}
