use wec_results::write_trajectory_file;
use wec_sim::{DampingLaw, HeaveState, SystemParameters, integrate};

fn params() -> SystemParameters {
    SystemParameters {
        m_a: 4866.0,
        m_b: 2433.0,
        m_add: 1335.535,
        k_e: 80000.0,
        c1: 100.0,
        c2: 656.3616,
        f: 6250.0,
        omega: 1.4005,
        rho0: 1025.0,
        g: 9.81,
        h_cyl: 0.5,
        h_cone: 0.3,
        r: 0.1,
        x_a0: 0.2,
        x_a1: -0.1,
    }
}

#[test]
fn written_table_reads_back() {
    let traj = integrate(
        HeaveState::new(1.0, 1.0, 0.0, 0.0),
        0.0,
        10.0,
        0.2,
        &params(),
        DampingLaw::Nonlinear,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trajectory.tsv");
    write_trajectory_file(&path, &traj, 0.2).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(&path)
        .unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["time", "xA", "xB", "vA", "vB"]
    );

    let rows: Vec<Vec<f64>> = reader
        .records()
        .map(|r| {
            r.unwrap()
                .iter()
                .map(|field| field.parse::<f64>().unwrap())
                .collect()
        })
        .collect();

    assert_eq!(rows.len(), traj.len());
    assert_eq!(rows[0], vec![0.0, 1.0, 1.0, 0.0, 0.0]);

    let last = traj.last().unwrap();
    let last_row = rows.last().unwrap();
    assert!((last_row[0] - (traj.len() - 1) as f64 * 0.2).abs() < 1e-12);
    assert_eq!(last_row[1], last.x_a);
    assert_eq!(last_row[4], last.v_b);
}
