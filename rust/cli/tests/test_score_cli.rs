use farkle_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["farkle"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn score_reports_triple_and_singles() {
    let (code, out, err) = run_cli(&["score", "1", "1", "1", "5", "2", "3"]);
    assert_eq!(code, 0, "stderr={}", err);
    assert!(out.contains("Triple 1s x1 = 1000"), "out={}", out);
    assert!(out.contains("Standard 50 x1 = 50"), "out={}", out);
    assert!(out.contains("Total: 1050"));
    assert!(out.contains("Leftover dice: 2"));
}

#[test]
fn score_accepts_comma_separated_faces() {
    let (code, out, _) = run_cli(&["score", "1,2,3,4,5,6"]);
    assert_eq!(code, 0);
    assert!(out.contains("Straight x1 = 2000"), "out={}", out);
    assert!(out.contains("Leftover dice: 0"));
}

#[test]
fn score_reports_bust() {
    let (code, out, _) = run_cli(&["score", "2", "3", "4", "6"]);
    assert_eq!(code, 0);
    assert!(out.contains("Bust! No scoring dice."));
    assert!(out.contains("Total: 0"));
    assert!(out.contains("Leftover dice: 4"));
}

#[test]
fn score_json_emits_record() {
    let (code, out, _) = run_cli(&["score", "--json", "5", "1", "4", "4", "4", "5"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).expect("json record");
    assert_eq!(v["points"], 650);
    assert_eq!(v["leftover"], 0);
    assert_eq!(v["bust"], false);
    assert_eq!(v["roll"], serde_json::json!([5, 1, 4, 4, 4, 5]));
    let rules: Vec<&str> = v["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["rule"].as_str().unwrap())
        .collect();
    assert_eq!(rules, ["Triple 4s", "Standard 100", "Standard 50"]);
    assert_eq!(v["matches"][2]["multiplier"], 2);
}

#[test]
fn score_rejects_invalid_face() {
    let (code, out, err) = run_cli(&["score", "1", "7"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error:"), "stderr={}", err);
    assert!(err.contains('7'));
}

#[test]
fn score_requires_faces() {
    let (code, _, err) = run_cli(&["score"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: farkle <command> [options]"));
}

#[test]
fn rules_lists_stock_catalog() {
    let (code, out, _) = run_cli(&["rules"]);
    assert_eq!(code, 0);
    assert!(out.contains("Standard 100"));
    assert!(out.contains("Three Pair"));
    assert!(out.contains("10 rule(s)"));
}

#[test]
fn roll_with_seed_is_reproducible() {
    let (code1, out1, _) = run_cli(&["roll", "--seed", "99", "--dice", "5"]);
    let (code2, out2, _) = run_cli(&["roll", "--seed", "99", "--dice", "5"]);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2);
    assert!(out1.starts_with("Seed: 99\n"));
}

#[test]
fn roll_rejects_too_many_dice() {
    let (code, _, err) = run_cli(&["roll", "--dice", "13"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let (code, out, _) = run_cli(&["--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("farkle"));
}
