mod common;

use common::run_json;

#[test]
fn five_percent_increase_flow() {
    let v = run_json(&[
        "impact", "--rent", "1800", "--increase", "5", "--state", "California", "--income", "6000",
    ]);
    assert_eq!(v["ok"], true);
    let result = &v["data"]["result"];
    assert_eq!(result["increase_amount"], 90);
    assert_eq!(result["new_rent"], 1890);
    assert_eq!(result["annual_increase"], 1080);
    assert!((result["rent_to_income_ratio"].as_f64().unwrap() - 31.5).abs() < 1e-9);
    assert_eq!(result["affordability"], "cost_burdened");
    assert_eq!(v["data"]["input"]["state"], "California");
}

#[test]
fn zero_increase_flow() {
    let v = run_json(&["impact", "--rent", "1000", "--increase", "0", "--income", "5000"]);
    let result = &v["data"]["result"];
    assert_eq!(result["increase_amount"], 0);
    assert_eq!(result["new_rent"], 1000);
    assert!((result["rent_to_income_ratio"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    assert_eq!(result["affordability"], "affordable");
}

#[test]
fn ten_percent_on_low_income_flow() {
    let v = run_json(&["impact", "--rent", "3000", "--increase", "10", "--income", "4000"]);
    let result = &v["data"]["result"];
    assert_eq!(result["increase_amount"], 300);
    assert_eq!(result["new_rent"], 3300);
    assert!((result["rent_to_income_ratio"].as_f64().unwrap() - 82.5).abs() < 1e-9);
    assert_eq!(result["affordability"], "severely_burdened");
}

#[test]
fn zero_income_has_no_division_artifact() {
    let v = run_json(&["impact", "--rent", "2500", "--increase", "7.5", "--income", "0"]);
    let result = &v["data"]["result"];
    assert_eq!(result["rent_to_income_ratio"].as_f64().unwrap(), 0.0);
    assert_eq!(result["affordability"], "affordable");
}

#[test]
fn unparseable_fields_coerce_to_zero() {
    let v = run_json(&["impact", "--rent", "junk", "--increase", "abc", "--income", "-5"]);
    let result = &v["data"]["result"];
    assert_eq!(v["data"]["input"]["current_rent"], 0);
    assert_eq!(v["data"]["input"]["monthly_income"], 0);
    assert_eq!(result["new_rent"], 0);
    assert_eq!(result["rent_to_income_ratio"].as_f64().unwrap(), 0.0);
}

#[test]
fn breakdown_rows_match_impact_figures() {
    let v = run_json(&["breakdown", "--rent", "1800", "--increase", "5", "--income", "6000"]);
    let rows = v["data"].as_array().expect("rows array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["label"], "Current Monthly Rent");
    assert_eq!(rows[0]["value"], "$1,800");
    assert_eq!(rows[1]["value"], "+$90");
    assert_eq!(rows[2]["value"], "$1,890");
    assert_eq!(rows[3]["label"], "Annual Impact");
    assert_eq!(rows[3]["value"], "+$1,080");
    assert_eq!(rows[3]["is_total"], true);
}

#[test]
fn classification_boundaries() {
    for (ratio, expected) in [
        ("30", "affordable"),
        ("30.0001", "cost_burdened"),
        ("50", "cost_burdened"),
        ("50.0001", "severely_burdened"),
    ] {
        let v = run_json(&["classify", ratio]);
        assert_eq!(v["data"]["affordability"], expected, "ratio {ratio}");
    }
}

#[test]
fn states_lists_all_fifty() {
    let v = run_json(&["states"]);
    assert_eq!(v["data"].as_array().expect("states array").len(), 50);
}

#[test]
fn states_query_is_case_insensitive() {
    let v = run_json(&["states", "NEW"]);
    let found: Vec<&str> = v["data"]
        .as_array()
        .expect("states array")
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(
        found,
        ["New Hampshire", "New Jersey", "New Mexico", "New York"]
    );
}

#[test]
fn tips_carry_disclaimer() {
    let v = run_json(&["tips"]);
    let tips = v["data"]["tips"].as_array().expect("tips array");
    assert_eq!(tips.len(), 4);
    assert!(tips[0].as_str().unwrap().contains("30% rule"));
    assert!(v["data"]["disclaimer"]
        .as_str()
        .unwrap()
        .contains("do not constitute legal advice"));
}
