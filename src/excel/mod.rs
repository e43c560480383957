//! Módulo `excel` dividido en submódulos para mantener el código organizado.
//!
//! Submódulos:
//! - `io`: helpers de conversión de celdas y encabezados
//! - `ingest`: lectura de subidas CSV/planilla hacia el preview/dataset
//! - `export`: espejo .xlsx de los horarios (feature `xlsx-export`)

/// Helpers de conversión para celdas y encabezados
mod io;

/// Ingesta de ficheros tabulares subidos
mod ingest;

/// Export de horarios a planilla
mod export;

// Re-exports: los helpers de IO son internos; exponemos la API de alto nivel
pub use export::{refresh_schedule_mirror, write_schedule_xlsx, xlsx_export_enabled, SCHEDULE_HEADERS};
pub use ingest::{ingest_file_named, ingest_tabular, IngestError, TabularFormat};
pub use io::{cell_to_string, cell_to_value};
