//! End-to-end scenarios: text packages in, summary lines out.

use workout_compute::{
    default_packages, parse_packages, run_batch, BatchPolicy, ReportOptions, Settings,
    TrainingError, WalkingDivision,
};

fn render(text: &str, options: &ReportOptions) -> Result<Vec<String>, TrainingError> {
    let packages = parse_packages(text)?;
    let mut out = Vec::new();
    run_batch(&packages, options, &mut out)?;
    Ok(String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect())
}

#[test]
fn reference_packages_produce_expected_lines() {
    let mut out = Vec::new();
    run_batch(&default_packages(), &ReportOptions::default(), &mut out).unwrap();

    let expected = "\
Training type: Swimming Duration: 1.000 h.; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories burned: 336.000.
Training type: Running Duration: 1.000 h.; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.
Training type: SportsWalking Duration: 1.000 h.; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories burned: 157.500.
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn running_scenario() {
    let lines = render("RUN 15000 1 75", &ReportOptions::default()).unwrap();
    assert!(lines[0].contains("Distance: 9.750 km"));
    assert!(lines[0].contains("Mean speed: 9.750 km/h"));
}

#[test]
fn swimming_scenario() {
    let lines = render("SWM 720, 1, 80, 25, 40", &ReportOptions::default()).unwrap();
    assert!(lines[0].contains("Mean speed: 1.000 km/h"));
    assert!(lines[0].ends_with("Calories burned: 336.000."));
}

#[test]
fn walking_scenario_with_true_division() {
    let options = ReportOptions {
        settings: Settings::default().with_walking_division(WalkingDivision::True),
        ..ReportOptions::default()
    };
    let lines = render("WLK 9000 1 75 180", &options).unwrap();
    assert_eq!(
        lines[0],
        "Training type: SportsWalking Duration: 1.000 h.; Distance: 5.850 km; \
         Mean speed: 5.850 km/h; Calories burned: 182.311."
    );
}

#[test]
fn unknown_code_stops_the_batch() {
    let result = render("XYZ 1 1 1\nRUN 15000 1 75", &ReportOptions::default());
    assert_eq!(
        result,
        Err(TrainingError::UnknownWorkoutType("XYZ".to_string()))
    );
}

#[test]
fn zero_duration_is_reported() {
    let result = render("RUN 15000 0 75", &ReportOptions::default());
    assert!(matches!(result, Err(TrainingError::DivisionByZero { .. })));
}

#[test]
fn skip_policy_keeps_valid_packages() {
    let options = ReportOptions {
        policy: BatchPolicy::Skip,
        ..ReportOptions::default()
    };
    let text = "RUN 15000 1\nXYZ 1 1 1\nRUN 15000 1 75\n";
    let lines = render(text, &options).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Training type: Running"));
}
