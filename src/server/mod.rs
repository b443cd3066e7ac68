//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el transporte TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Entrega los bytes al handler de archivos estáticos
//! 4. Escribe la respuesta y cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
