use spectrum_scorer::error::SpectrumError;
use spectrum_scorer::loader::{load_sessions, write_results};
use spectrum_scorer::scorer::SpectrumScorer;
use std::io::Cursor;

#[test]
fn test_in_memory_sessions() {
    let data = "alice,85.8,171.6,257.4,342.6,428.4,514.2\nbob,10,20,30\ncarol\n";
    let sessions = load_sessions(Cursor::new(data)).expect("Session load failed");

    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].0, "alice");
    assert_eq!(sessions[0].1.len(), 6);
    assert_eq!(sessions[1].1.len(), 3);
    assert!(sessions[2].1.is_empty());
}

#[test]
fn test_blank_cells_and_whitespace_skipped() {
    let data = " dave , 100 ,, 200,\n";
    let sessions = load_sessions(Cursor::new(data)).unwrap();

    assert_eq!(sessions[0].0, "dave");
    let xs: Vec<f64> = sessions[0].1.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![100.0, 200.0]);
}

#[test]
fn test_empty_session_id_skipped() {
    let data = ",1,2,3\neve,1\n";
    let sessions = load_sessions(Cursor::new(data)).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].0, "eve");
}

#[test]
fn test_bad_number_names_row() {
    let data = "ok,1,2\nbad,1,two\n";
    match load_sessions(Cursor::new(data)) {
        Err(SpectrumError::InvalidInput { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("bad"));
            assert!(reason.contains("two"));
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_non_finite_cell_rejected() {
    assert!(load_sessions(Cursor::new("x,NaN\n")).is_err());
}

#[test]
fn test_results_csv_layout() {
    let scorer = SpectrumScorer::default();
    let sessions = load_sessions(Cursor::new(
        "alice,85.8,171.6,257.4,342.6,428.4,514.2\nbob\n",
    ))
    .unwrap();
    let results = scorer.analyze_batch(&sessions);

    let mut buf = Vec::new();
    write_results(&mut buf, &results).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "session,score,type,message");
    assert_eq!(lines[1], "alice,100.0,normal,Excellent color discrimination!");
    assert!(lines[2].starts_with("bob,0.0,unknown,"));
}
