use timelyflow::api_json::{
    parse_json_input, parse_lunch_mode, validate_generate_params, validate_manual_entry,
    GenerateParams,
};
use timelyflow::models::{LunchPolicy, ScheduleRow, DAYS, SLOTS};

#[test]
fn test_parse_generate_params_completo() {
    let json_data = r#"
    {
        "days": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "slots": ["9:30-10:30", "10:30-11:30", "11:30-12:30", "12:30-1:30"],
        "lunch": "Random"
    }
    "#;

    let params = parse_json_input(json_data).expect("Debe parsear GenerateParams");
    assert_eq!(params.days.len(), 5);
    assert_eq!(params.slots.len(), 4);

    let lunch = validate_generate_params(&params).expect("params válidos");
    assert_eq!(lunch, LunchPolicy::Random);
}

#[test]
fn test_parse_generate_params_incompleto_falla() {
    // sin el campo lunch
    let json_data = r#"{"days": ["Monday"], "slots": ["9:30-10:30"]}"#;
    assert!(parse_json_input(json_data).is_err());
}

#[test]
fn test_tablas_cerradas_completas_validan() {
    let params = GenerateParams {
        days: DAYS.iter().map(|d| d.to_string()).collect(),
        slots: SLOTS.iter().map(|s| s.to_string()).collect(),
        lunch: "None".to_string(),
    };
    assert_eq!(validate_generate_params(&params), Ok(LunchPolicy::None));
}

#[test]
fn test_listas_vacias_se_rechazan() {
    let params = GenerateParams {
        days: vec![],
        slots: vec!["9:30-10:30".to_string()],
        lunch: "None".to_string(),
    };
    assert!(validate_generate_params(&params).is_err());

    let params = GenerateParams {
        days: vec!["Monday".to_string()],
        slots: vec![],
        lunch: "None".to_string(),
    };
    assert!(validate_generate_params(&params).is_err());
}

#[test]
fn test_slot_desconocido_se_rechaza() {
    let params = GenerateParams {
        days: vec!["Monday".to_string()],
        slots: vec!["8:00-9:00".to_string()],
        lunch: "None".to_string(),
    };
    let err = validate_generate_params(&params).expect_err("slot inválido");
    assert!(err.contains("8:00-9:00"));
}

#[test]
fn test_parse_lunch_mode_variantes() {
    assert_eq!(parse_lunch_mode("None"), Ok(LunchPolicy::None));
    assert_eq!(parse_lunch_mode("none"), Ok(LunchPolicy::None));
    assert_eq!(parse_lunch_mode("Random"), Ok(LunchPolicy::Random));
    assert_eq!(
        parse_lunch_mode("Fixed: 12:30-1:30"),
        Ok(LunchPolicy::Fixed("12:30-1:30".to_string()))
    );
    // el bloque fijo debe pertenecer a la tabla cerrada
    assert!(parse_lunch_mode("Fixed: 8:00-9:00").is_err());
    assert!(parse_lunch_mode("Siesta").is_err());
}

#[test]
fn test_manual_valida_dia_y_bloque() {
    let ok = ScheduleRow {
        day: "Friday".to_string(),
        slot: "2:30-3:30".to_string(),
        subject: "".to_string(), // el resto va tal cual, incluso vacío
        faculty: "".to_string(),
        room: "".to_string(),
    };
    assert!(validate_manual_entry(&ok).is_ok());

    let bad_day = ScheduleRow {
        day: "Sunday".to_string(),
        slot: "2:30-3:30".to_string(),
        subject: "Math".to_string(),
        faculty: "Ada".to_string(),
        room: "101".to_string(),
    };
    assert!(validate_manual_entry(&bad_day).is_err());

    let bad_slot = ScheduleRow {
        day: "Friday".to_string(),
        slot: "23:00-24:00".to_string(),
        subject: "Math".to_string(),
        faculty: "Ada".to_string(),
        room: "101".to_string(),
    };
    assert!(validate_manual_entry(&bad_slot).is_err());
}
