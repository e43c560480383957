// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Días hábiles de la institución, en el orden en que se ofrecen al usuario.
pub const DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Bloques horarios fijos de la jornada (lista cerrada).
pub const SLOTS: [&str; 7] = [
    "9:30-10:30",
    "10:30-11:30",
    "11:30-12:30",
    "12:30-1:30",
    "1:30-2:30",
    "2:30-3:30",
    "3:30-4:30",
];

/// Bloques candidatos a almuerzo cuando la política es `Random`.
pub const LUNCH_CHOICES: [&str; 2] = ["12:30-1:30", "1:30-2:30"];

/// Marcadores de una fila de almuerzo en el horario.
pub const LUNCH_SUBJECT: &str = "LUNCH";
pub const LUNCH_PLACEHOLDER: &str = "-";

/// Rango aceptado para la capacidad de una sala.
pub const ROOM_CAPACITY_MIN: i64 = 10;
pub const ROOM_CAPACITY_MAX: i64 = 500;

/// Registro docente/asignatura. Se serializa con las claves históricas
/// `Faculty`/`Subject` de los ficheros JSON persistidos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacultyRecord {
    pub faculty: String,
    pub subject: String,
}

/// Sala con capacidad. Claves persistidas: `Room`/`Capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomRecord {
    pub room: String,
    pub capacity: i64,
}

/// Una fila del horario: un bloque de un día con su asignación.
/// Las filas de almuerzo llevan `Subject = "LUNCH"` y `Faculty`/`Room` = "-".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleRow {
    pub day: String,
    pub slot: String,
    pub subject: String,
    pub faculty: String,
    pub room: String,
}

impl ScheduleRow {
    /// Fila de almuerzo para `day`/`slot`.
    pub fn lunch(day: &str, slot: &str) -> Self {
        ScheduleRow {
            day: day.to_string(),
            slot: slot.to_string(),
            subject: LUNCH_SUBJECT.to_string(),
            faculty: LUNCH_PLACEHOLDER.to_string(),
            room: LUNCH_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_lunch(&self) -> bool {
        self.subject == LUNCH_SUBJECT
    }
}

/// Política de almuerzo por día al generar un horario.
#[derive(Debug, Clone, PartialEq)]
pub enum LunchPolicy {
    /// Siempre el mismo bloque, todos los días.
    Fixed(String),
    /// Un bloque de `LUNCH_CHOICES` elegido de forma independiente por día.
    Random,
    /// Sin bloque de almuerzo.
    None,
}

pub fn is_valid_day(day: &str) -> bool {
    DAYS.contains(&day)
}

pub fn is_valid_slot(slot: &str) -> bool {
    SLOTS.contains(&slot)
}
