use serde::{Deserialize, Serialize};

use crate::models::{
    is_valid_day, is_valid_slot, FacultyRecord, LunchPolicy, RoomRecord, ScheduleRow,
    ROOM_CAPACITY_MAX, ROOM_CAPACITY_MIN,
};

pub mod handlers;

/// Parámetros de entrada para la generación de horario
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
///   "slots": ["9:30-10:30", "10:30-11:30", "12:30-1:30"],
///   "lunch": "Fixed: 12:30-1:30"
/// }
/// ```
///
/// # Campos:
/// - `days`: subconjunto de `models::DAYS`, en el orden en que deben salir
/// - `slots`: subconjunto de `models::SLOTS`, en el orden en que deben salir
/// - `lunch`: `"Fixed: <slot>"`, `"Random"` o `"None"`
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateParams {
    pub days: Vec<String>,
    pub slots: Vec<String>,
    pub lunch: String,
}

/// Cuerpo de un pedido de borrado. `index` presente borra esa posición;
/// ausente pide borrar la colección completa.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub index: Option<usize>,
}

/// Segundo paso de la confirmación: la clave devuelta por el pedido y la
/// decisión del usuario.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmParams {
    pub key: String,
    pub accept: bool,
}

pub fn parse_json_input(json_str: &str) -> Result<GenerateParams, serde_json::Error> {
    serde_json::from_str::<GenerateParams>(json_str)
}

/// Traduce el modo de almuerzo del request a una `LunchPolicy`.
/// Acepta el formato del selector original: `Fixed: <slot>` / `Random` / `None`.
pub fn parse_lunch_mode(mode: &str) -> Result<LunchPolicy, String> {
    let m = mode.trim();
    if m.eq_ignore_ascii_case("none") {
        return Ok(LunchPolicy::None);
    }
    if m.eq_ignore_ascii_case("random") {
        return Ok(LunchPolicy::Random);
    }
    if let Some(rest) = m.strip_prefix("Fixed:") {
        let slot = rest.trim();
        if !is_valid_slot(slot) {
            return Err(format!("unknown lunch slot '{}'", slot));
        }
        return Ok(LunchPolicy::Fixed(slot.to_string()));
    }
    Err(format!(
        "unknown lunch mode '{}': expected 'Fixed: <slot>', 'Random' or 'None'",
        mode
    ))
}

/// Valida days/slots contra las tablas cerradas y resuelve la política de
/// almuerzo. El orden entregado por el caller se respeta tal cual.
pub fn validate_generate_params(params: &GenerateParams) -> Result<LunchPolicy, String> {
    if params.days.is_empty() {
        return Err("at least one day is required".to_string());
    }
    if params.slots.is_empty() {
        return Err("at least one slot is required".to_string());
    }
    for day in &params.days {
        if !is_valid_day(day) {
            return Err(format!("unknown day '{}'", day));
        }
    }
    for slot in &params.slots {
        if !is_valid_slot(slot) {
            return Err(format!("unknown slot '{}'", slot));
        }
    }
    parse_lunch_mode(&params.lunch)
}

/// Normaliza un alta de docente: recorta espacios y exige ambos campos.
pub fn normalize_faculty(mut record: FacultyRecord) -> Result<FacultyRecord, String> {
    record.faculty = record.faculty.trim().to_string();
    record.subject = record.subject.trim().to_string();
    if record.faculty.is_empty() {
        return Err("faculty name must not be empty".to_string());
    }
    if record.subject.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    Ok(record)
}

/// Normaliza un alta de sala: id no vacío y capacidad dentro del rango.
pub fn normalize_room(mut record: RoomRecord) -> Result<RoomRecord, String> {
    record.room = record.room.trim().to_string();
    if record.room.is_empty() {
        return Err("room id must not be empty".to_string());
    }
    if record.capacity < ROOM_CAPACITY_MIN || record.capacity > ROOM_CAPACITY_MAX {
        return Err(format!(
            "capacity must be between {} and {}",
            ROOM_CAPACITY_MIN, ROOM_CAPACITY_MAX
        ));
    }
    Ok(record)
}

/// Un alta manual sólo exige día y bloque conocidos; el resto de los campos
/// se guarda tal cual lo escribió el usuario.
pub fn validate_manual_entry(row: &ScheduleRow) -> Result<(), String> {
    if !is_valid_day(&row.day) {
        return Err(format!("unknown day '{}'", row.day));
    }
    if !is_valid_slot(&row.slot) {
        return Err(format!("unknown slot '{}'", row.slot));
    }
    Ok(())
}
