// Generación aleatoria del horario semanal. Única pieza con lógica de
// decisión del sistema: el resto del crate es persistencia y transporte.

use rand::Rng;
use thiserror::Error;

use crate::models::{FacultyRecord, LunchPolicy, RoomRecord, ScheduleRow, LUNCH_CHOICES};

/// Falta de recursos mínimos para generar: el caller debe mostrar una
/// advertencia y no persistir nada.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no faculties registered; add at least one faculty before generating")]
    MissingFaculties,
    #[error("no rooms registered; add at least one room before generating")]
    MissingRooms,
}

/// Genera un horario completo con la fuente de aleatoriedad por defecto.
pub fn generar_horario(
    days: &[String],
    slots: &[String],
    lunch: &LunchPolicy,
    faculties: &[FacultyRecord],
    rooms: &[RoomRecord],
) -> Result<Vec<ScheduleRow>, GenerateError> {
    generar_horario_con_rng(days, slots, lunch, faculties, rooms, &mut rand::rng())
}

/// Versión parametrizable para pruebas: recibe el `Rng` a usar, de modo que
/// un `StdRng` sembrado produzca asignaciones reproducibles.
///
/// Recorre los días en el orden entregado por el caller y, dentro de cada
/// día, los bloques en su orden. El bloque de almuerzo del día (si la
/// política define uno) produce una fila LUNCH; para el resto se elige un
/// docente y una sala de forma uniforme e independiente. No hay control de
/// topes: un docente o sala puede quedar asignado a dos bloques simultáneos
/// de días distintos, y eso es parte del contrato.
pub fn generar_horario_con_rng<R: Rng + ?Sized>(
    days: &[String],
    slots: &[String],
    lunch: &LunchPolicy,
    faculties: &[FacultyRecord],
    rooms: &[RoomRecord],
    rng: &mut R,
) -> Result<Vec<ScheduleRow>, GenerateError> {
    if faculties.is_empty() {
        return Err(GenerateError::MissingFaculties);
    }
    if rooms.is_empty() {
        return Err(GenerateError::MissingRooms);
    }

    let mut rows: Vec<ScheduleRow> = Vec::with_capacity(days.len() * slots.len());
    for day in days {
        // Resolver el bloque de almuerzo de este día según la política.
        let lunch_today: Option<&str> = match lunch {
            LunchPolicy::Fixed(slot) => Some(slot.as_str()),
            LunchPolicy::Random => {
                Some(LUNCH_CHOICES[rng.random_range(0..LUNCH_CHOICES.len())])
            }
            LunchPolicy::None => None,
        };

        for slot in slots {
            if lunch_today == Some(slot.as_str()) {
                rows.push(ScheduleRow::lunch(day, slot));
                continue;
            }
            let f = &faculties[rng.random_range(0..faculties.len())];
            let r = &rooms[rng.random_range(0..rooms.len())];
            rows.push(ScheduleRow {
                day: day.clone(),
                slot: slot.clone(),
                subject: f.subject.clone(),
                faculty: f.faculty.clone(),
                room: r.room.clone(),
            });
        }
    }

    Ok(rows)
}

/// Alta manual: anexa sin comprobar unicidad ni choques con filas previas
/// del mismo (día, bloque). El caller persiste la secuencia devuelta.
pub fn add_manual_entry(mut existing: Vec<ScheduleRow>, entry: ScheduleRow) -> Vec<ScheduleRow> {
    existing.push(entry);
    existing
}
