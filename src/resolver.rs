//! # Resolución de Paths y Guard de Seguridad
//! src/resolver.rs
//!
//! Este módulo mapea el path de un request HTTP a un path del sistema de
//! archivos y verifica que el resultado quede dentro del árbol permitido.
//!
//! ## Resolución
//!
//! El path candidato se arma por concatenación literal:
//!
//! ```text
//! <base_dir> + <web_root> + <request_path>
//! ej: /home/user/servidor + /www + /deep/index.html
//! ```
//!
//! ## Guard de seguridad
//!
//! `is_safe_path` canonicaliza el candidato (resolviendo symlinks) y exige
//! que el resultado tenga como prefijo la forma canónica de `base_dir`.
//! Cualquier path que no se pueda canonicalizar se considera inseguro:
//! ante la duda, se niega el acceso y el dispatcher responde 404.
//!
//! La comparación es de prefijo sobre strings: un directorio hermano que
//! comparta prefijo textual con `base_dir` pasaría el guard. Ver DESIGN.md.

use std::fs;
use std::path::{Path, PathBuf};

/// Calcula el path candidato del sistema de archivos para un request
///
/// Concatenación literal `<base_dir><web_root><request_path>`. No se
/// normaliza nada en este paso; eso es trabajo de [`is_safe_path`].
///
/// # Ejemplo
/// ```
/// use std::path::Path;
/// use servidor_estatico::resolver;
///
/// let candidate = resolver::resolve(Path::new("/srv/app"), "/www", "/index.html");
/// assert_eq!(candidate, Path::new("/srv/app/www/index.html").to_path_buf());
/// ```
pub fn resolve(base_dir: &Path, web_root: &str, request_path: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}{}{}",
        base_dir.display(),
        web_root,
        request_path
    ))
}

/// Canonicaliza el directorio base contra el que se valida todo path
///
/// Se llama una sola vez, al construir el handler: el base no cambia entre
/// requests, así que no hay razón para re-canonicalizarlo por conexión.
pub fn canonical_base(base_dir: &Path) -> std::io::Result<PathBuf> {
    fs::canonicalize(base_dir)
}

/// Verifica que un path candidato quede dentro del directorio base
///
/// `canonical_base` debe venir ya canonicalizado (ver [`canonical_base`]).
/// El candidato se canonicaliza aquí (siguiendo symlinks) y se compara por
/// prefijo de string. Si no existe o no se puede canonicalizar, retorna
/// `false`: el guard falla cerrado.
pub fn is_safe_path(canonical_base: &Path, candidate: &Path) -> bool {
    let real = match fs::canonicalize(candidate) {
        Ok(p) => p,
        Err(_) => return false,
    };

    real.to_string_lossy()
        .starts_with(&*canonical_base.to_string_lossy())
}
