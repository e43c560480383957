//! Espejo .xlsx de los horarios generados y manuales.
//!
//! El export es una capacidad opcional (feature `xlsx-export`). Cuando no
//! está compilada, la operación primaria sigue adelante y el espejo
//! simplemente no se refresca, igual que el flujo original cuando faltaba la
//! librería de planillas.

use std::path::Path;

use crate::models::ScheduleRow;

pub const SCHEDULE_HEADERS: [&str; 5] = ["Day", "Slot", "Subject", "Faculty", "Room"];

pub fn xlsx_export_enabled() -> bool {
    cfg!(feature = "xlsx-export")
}

/// Columnas del espejo, en el mismo orden que `SCHEDULE_HEADERS`.
#[cfg(feature = "xlsx-export")]
const SCHEDULE_COLS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Escribe las filas del horario en una planilla nueva, encabezado incluido.
#[cfg(feature = "xlsx-export")]
pub fn write_schedule_xlsx(
    path: &Path,
    rows: &[ScheduleRow],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book
        .get_sheet_collection_mut()
        .first_mut()
        .ok_or("new workbook has no default sheet")?;

    for (idx, header) in SCHEDULE_HEADERS.iter().enumerate() {
        sheet
            .get_cell_mut(format!("{}1", SCHEDULE_COLS[idx]))
            .set_value(header.to_string());
    }
    for (idx, row) in rows.iter().enumerate() {
        let r = idx + 2;
        sheet.get_cell_mut(format!("A{}", r)).set_value(row.day.clone());
        sheet.get_cell_mut(format!("B{}", r)).set_value(row.slot.clone());
        sheet.get_cell_mut(format!("C{}", r)).set_value(row.subject.clone());
        sheet.get_cell_mut(format!("D{}", r)).set_value(row.faculty.clone());
        sheet.get_cell_mut(format!("E{}", r)).set_value(row.room.clone());
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| format!("xlsx write failed: {e:?}"))?;
    Ok(())
}

#[cfg(not(feature = "xlsx-export"))]
pub fn write_schedule_xlsx(
    _path: &Path,
    _rows: &[ScheduleRow],
) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

/// Refresca el espejo .xlsx tras una mutación del horario. Nunca falla hacia
/// el caller: la persistencia JSON ya ocurrió y es la copia de referencia.
pub fn refresh_schedule_mirror(path: &Path, rows: &[ScheduleRow]) {
    if !xlsx_export_enabled() {
        log::warn!("xlsx export not compiled in; skipping {}", path.display());
        return;
    }
    if let Err(e) = write_schedule_xlsx(path, rows) {
        log::warn!("failed to write xlsx mirror {}: {}", path.display(), e);
    }
}
