use calamine::Data;
use serde_json::{json, Value};

/// Convierte un `Data` de calamine a String (versión genérica para celdas)
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Convierte un `Data` a un valor JSON para el preview, conservando números
/// como números (los floats enteros bajan a i64, como hace `cell_to_string`).
pub fn cell_to_value(c: &Data) -> Value {
    match c {
        Data::String(s) => Value::String(s.trim().to_string()),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                json!(*f as i64)
            } else {
                json!(*f)
            }
        }
        Data::Int(i) => json!(*i),
        Data::Bool(b) => json!(*b),
        Data::Empty => Value::Null,
        Data::Error(_) => Value::Null,
        Data::DateTime(s) => Value::String(s.to_string()),
        Data::DateTimeIso(s) => Value::String(s.clone()),
        Data::DurationIso(s) => Value::String(s.clone()),
    }
}

/// Versión para celdas CSV: intenta número antes de dejar texto.
pub fn text_to_value(s: &str) -> Value {
    let t = s.trim();
    if let Ok(i) = t.parse::<i64>() {
        return json!(i);
    }
    if let Ok(f) = t.parse::<f64>() {
        return json!(f);
    }
    Value::String(t.to_string())
}

/// Nombre de columna a partir de una celda de encabezado; las celdas vacías
/// reciben un nombre sintético posicional.
pub fn header_name(raw: &str, index: usize) -> String {
    let t = raw.trim();
    if t.is_empty() {
        format!("column_{}", index + 1)
    } else {
        t.to_string()
    }
}
