use driftscope::core::generate::{generate, reference_periods, GenParams};
use driftscope::export::dataset_csv;

#[test]
fn one_column_per_period_in_period_order() {
    let params = GenParams {
        sample_count: 5,
        trend_strength: 0.5,
        volatility: 1.0,
        seed: 42,
    };
    let set = generate(&params, &reference_periods()).expect("valid params");
    let csv = dataset_csv(&set);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6, "header plus one row per observation");
    assert_eq!(lines[0], "2010,2011,2012,2013,2014,2015");

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 6);
        for field in fields {
            field.parse::<f64>().expect("numeric cell");
        }
    }
}

#[test]
fn cells_match_the_generated_values() {
    let params = GenParams {
        sample_count: 3,
        trend_strength: 0.0,
        volatility: 0.5,
        seed: 1,
    };
    let set = generate(&params, &reference_periods()).expect("valid params");
    let csv = dataset_csv(&set);
    let second_row = csv.lines().nth(1).expect("data row");

    for (col, cell) in second_row.split(',').enumerate() {
        let expected = format!("{:.6}", set.samples(col)[0]);
        assert_eq!(cell, expected);
    }
}
