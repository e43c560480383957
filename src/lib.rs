// Biblioteca raíz del crate `timelyflow`.
// Reexporta los módulos principales; `run_server` levanta la API HTTP.
pub mod algorithm;
pub mod api_json;
pub mod excel;
pub mod models;
pub mod server;
pub mod storage;

/// Arranque del servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
