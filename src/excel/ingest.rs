//! Ingesta de ficheros tabulares (CSV o planilla) hacia el preview/dataset.
//!
//! La primera fila es el encabezado; cada fila siguiente se convierte en un
//! objeto columna→valor que se almacena tal cual, sin transformación. Un
//! fallo de parseo aborta la ingesta completa sin tocar el estado guardado.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use serde_json::{Map, Value};
use thiserror::Error;

use super::io::{cell_to_string, cell_to_value, header_name, text_to_value};

/// Formato declarado de la subida, decidido por la extensión del fichero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Csv,
    Spreadsheet,
}

impl TabularFormat {
    pub fn from_filename(name: &str) -> Result<Self, IngestError> {
        let lower = name.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(TabularFormat::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(TabularFormat::Spreadsheet)
        } else {
            Err(IngestError::UnsupportedFormat(name.to_string()))
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file type '{0}': only .csv, .xls and .xlsx are accepted")]
    UnsupportedFormat(String),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no readable sheet")]
    NoSheet,
}

/// Ingesta por nombre de fichero: resuelve el formato y parsea los bytes.
pub fn ingest_file_named(bytes: &[u8], filename: &str) -> Result<Vec<Map<String, Value>>, IngestError> {
    ingest_tabular(bytes, TabularFormat::from_filename(filename)?)
}

pub fn ingest_tabular(bytes: &[u8], format: TabularFormat) -> Result<Vec<Map<String, Value>>, IngestError> {
    match format {
        TabularFormat::Csv => ingest_csv(bytes),
        TabularFormat::Spreadsheet => ingest_spreadsheet(bytes),
    }
}

fn ingest_csv(bytes: &[u8]) -> Result<Vec<Map<String, Value>>, IngestError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| header_name(h, i))
        .collect();

    let mut rows: Vec<Map<String, Value>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Map::new();
        for (i, field) in record.iter().enumerate() {
            let name = headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| header_name("", i));
            row.insert(name, text_to_value(field));
        }
        rows.push(row);
    }
    Ok(rows)
}

fn ingest_spreadsheet(bytes: &[u8]) -> Result<Vec<Map<String, Value>>, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    // Siempre la primera hoja; el flujo original no ofrece elegir otra.
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::NoSheet)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut iter = range.rows();
    let headers: Vec<String> = match iter.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(i, c)| header_name(&cell_to_string(c), i))
            .collect(),
        None => return Ok(Vec::new()),
    };

    let mut rows: Vec<Map<String, Value>> = Vec::new();
    for data_row in iter {
        let mut row = Map::new();
        for (i, cell) in data_row.iter().enumerate() {
            let name = headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| header_name("", i));
            row.insert(name, cell_to_value(cell));
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_basico_con_numeros() {
        let csv = b"Day,Slot,Capacity\nMonday,9:30-10:30,50\nTuesday,10:30-11:30,80\n";
        let rows = ingest_tabular(csv, TabularFormat::Csv).expect("debe parsear CSV");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Day"), Some(&Value::String("Monday".into())));
        assert_eq!(rows[0].get("Capacity"), Some(&serde_json::json!(50)));
        assert_eq!(rows[1].get("Slot"), Some(&Value::String("10:30-11:30".into())));
    }

    #[test]
    fn test_extension_desconocida() {
        let err = TabularFormat::from_filename("horario.pdf").expect_err("pdf no se acepta");
        assert!(matches!(err, IngestError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_csv_malformado_aborta() {
        // fila con más campos que el encabezado
        let csv = b"a,b\n1,2,3\n";
        let err = ingest_tabular(csv, TabularFormat::Csv).expect_err("debe fallar");
        assert!(matches!(err, IngestError::Csv(_)));
    }
}
