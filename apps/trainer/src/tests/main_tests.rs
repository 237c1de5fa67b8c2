use super::*;

use crate::config::load_settings_with;
use shared::domain::ProblemVariant;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("trainer").chain(args.iter().copied())).expect("cli")
}

#[test]
fn cli_tolerance_beats_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env = |key: &str| (key == "APP__TOLERANCE").then(|| "0.5".to_string());
    let mut settings = load_settings_with(&dir.path().join("absent.toml"), env).expect("settings");
    assert_eq!(settings.tolerance, 0.5);

    apply_cli(&mut settings, &parse(&["--tolerance", "2", "--seed", "9"])).expect("apply");

    assert_eq!(settings.tolerance, 2.0);
    assert_eq!(settings.seed, Some(9));
}

#[test]
fn absent_flags_keep_loaded_settings() {
    let mut settings = Settings {
        tolerance: 0.5,
        seed: Some(3),
        ..Settings::default()
    };
    apply_cli(&mut settings, &parse(&[])).expect("apply");

    assert_eq!(settings.tolerance, 0.5);
    assert_eq!(settings.seed, Some(3));
}

#[test]
fn negative_cli_tolerance_is_rejected() {
    let mut settings = Settings::default();
    let err = apply_cli(&mut settings, &parse(&["--tolerance", "-1"])).unwrap_err();

    assert!(format!("{err:#}").contains("non-negative"));
    assert_eq!(settings.tolerance, Settings::default().tolerance);
}

#[test]
fn generate_subcommand_parses_flags() {
    let cli = parse(&["generate", "--dorsiflexed"]);
    assert!(matches!(
        cli.command,
        Some(Command::Generate {
            dorsiflexed: true,
            answers: false
        })
    ));
    assert!(parse(&[]).command.is_none());
}

#[test]
fn dorsiflexed_report_keeps_the_leg_and_hides_answers() {
    let generic = generate(&mut RandomSource::seeded(7), false, false);
    let dorsiflexed = generate(&mut RandomSource::seeded(7), true, false);

    assert_eq!(generic.variant, ProblemVariant::Generic);
    assert_eq!(dorsiflexed.variant, ProblemVariant::Dorsiflexed);
    assert_eq!(dorsiflexed.coordinates[..2], generic.coordinates[..2]);
    assert!(dorsiflexed.coordinates[2].y < dorsiflexed.coordinates[1].y);

    let json = serde_json::to_value(&dorsiflexed).expect("json");
    assert!(json.get("answers").is_none());
    assert!(json.get("coordinates").is_some());
}

#[test]
fn answers_appear_only_when_requested() {
    let view = generate(&mut RandomSource::seeded(11), false, true);
    let answers = view.answers.expect("answers");

    let json = serde_json::to_value(&view).expect("json");
    assert_eq!(json["answers"]["ankle"], serde_json::json!(answers.ankle));
}

#[test]
fn invalid_log_filter_falls_back_with_error() {
    let (_, rejected) = log_filter("trainer=loud");
    assert!(rejected.is_some());

    let (_, rejected) = log_filter("debug,session=trace");
    assert!(rejected.is_none());
}
