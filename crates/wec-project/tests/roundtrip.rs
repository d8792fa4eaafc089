use wec_project::schema::*;
use wec_project::{ProjectError, load_json, load_scenario, load_yaml, save_json, save_yaml};

fn scenario() -> ScenarioFile {
    ScenarioFile {
        version: 1,
        name: "Roundtrip".to_string(),
        parameters: ParametersDef::reference(),
        simulation: Some(SimulationDef {
            initial_state: vec![1.0, 1.0, 0.0, 0.0],
            t0: 0.0,
            t_end: 10.0,
            dt: 0.2,
            damping_law: DampingLawDef::Linear,
        }),
        optimizer: Some(OptimizerDef {
            c1_stop: 20_000.0,
            omega: Some(1.2),
            ..OptimizerDef::default()
        }),
    }
}

#[test]
fn roundtrip_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.yaml");

    save_yaml(&path, &scenario()).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(loaded, scenario());
}

/// JSON float parsing may differ from the written value in the last bit.
fn assert_close(a: &ScenarioFile, b: &ScenarioFile) {
    assert_eq!(a.version, b.version);
    assert_eq!(a.name, b.name);
    for ((name, x), (_, y)) in a.parameters.fields().into_iter().zip(b.parameters.fields()) {
        assert!((x - y).abs() <= 1e-12 * x.abs().max(1.0), "{name}: {x} vs {y}");
    }
    let (sa, sb) = (a.simulation.as_ref().unwrap(), b.simulation.as_ref().unwrap());
    assert_eq!(sa.initial_state, sb.initial_state);
    assert_eq!(sa.damping_law, sb.damping_law);
    assert!((sa.dt - sb.dt).abs() < 1e-15);
    assert_eq!(a.optimizer.map(|o| o.c1_stop), b.optimizer.map(|o| o.c1_stop));
}

#[test]
fn roundtrip_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");

    save_json(&path, &scenario()).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_close(&loaded, &scenario());
}

#[test]
fn extension_selects_format() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("s.JSON");
    let yaml = dir.path().join("s.yml");

    save_json(&json, &scenario()).unwrap();
    save_yaml(&yaml, &scenario()).unwrap();

    assert_close(&load_scenario(&json).unwrap(), &scenario());
    assert_eq!(load_scenario(&yaml).unwrap(), scenario());
}

#[test]
fn save_refuses_invalid_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");

    let mut bad = scenario();
    bad.parameters.x_a1 = bad.parameters.x_a0;

    assert!(matches!(
        save_yaml(&path, &bad),
        Err(ProjectError::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_yaml(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}

#[test]
fn malformed_yaml_is_reported() {
    let err = wec_project::parse_yaml("version: [not a number").unwrap_err();
    assert!(matches!(err, ProjectError::Yaml(_)));
}
