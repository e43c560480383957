// Módulo de alto nivel para la generación de horarios
// Declarar submódulos (archivos en la carpeta `src/algorithm`)
mod horario;

// Reexportar solo la API pública que el server y las pruebas consumen
pub use horario::{add_manual_entry, generar_horario, generar_horario_con_rng, GenerateError};
