// assist_core/tests/interpreter_tests.rs
// Behavioral tests for the command interpreter surface

use assist_core::intent::{Intent, IntentClassifier};
use assist_core::suggestions::{default_catalog, suggest};
use assist_core::temporal::{extract_date_time, parse_date_time};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_reminder_commands_classify_as_reminder() {
    let classifier = IntentClassifier::new();
    for command in [
        "remind me to water the plants",
        "Remind me about the dentist",
        "remind me when the game starts",
    ] {
        assert_eq!(
            classifier.classify(command),
            Intent::Reminder,
            "command: {}",
            command
        );
    }
}

#[test]
fn test_task_group_wins_over_reminder_group() {
    let classifier = IntentClassifier::new();
    assert_eq!(
        classifier.classify("remind me to add a task to buy milk"),
        Intent::Task
    );
}

#[test]
fn test_empty_command_is_unknown() {
    let classifier = IntentClassifier::new();
    assert_eq!(classifier.classify(""), Intent::Unknown);
}

#[test]
fn test_interrogative_fallback() {
    let classifier = IntentClassifier::new();
    assert_eq!(
        classifier.classify("What is the capital of France?"),
        Intent::Question
    );
}

#[test]
fn test_extract_today_is_identity() {
    let now = at(2024, 1, 1, 10, 0);
    assert_eq!(extract_date_time("today", now), Some(now));
}

#[test]
fn test_extract_tomorrow_keeps_time() {
    let now = at(2024, 1, 1, 10, 0);
    assert_eq!(extract_date_time("tomorrow", now), Some(at(2024, 1, 2, 10, 0)));
}

#[test]
fn test_extract_clock_time_before_and_after_now() {
    assert_eq!(
        extract_date_time("at 3pm", at(2024, 1, 1, 10, 0)),
        Some(at(2024, 1, 1, 15, 0))
    );
    assert_eq!(
        extract_date_time("at 3pm", at(2024, 1, 1, 16, 0)),
        Some(at(2024, 1, 2, 15, 0))
    );
}

#[test]
fn test_extract_without_temporal_content() {
    let now = at(2024, 1, 1, 10, 0);
    assert_eq!(extract_date_time("no temporal content here", now), None);
}

#[test]
fn test_deadline_parser_handles_durations_and_calendar_dates() {
    let now = at(2024, 1, 1, 10, 0);

    // Forms the quick command scan does not recognize
    assert_eq!(extract_date_time("in 30 minutes", now), None);
    assert_eq!(
        parse_date_time("in 30 minutes", now),
        Some(at(2024, 1, 1, 10, 30))
    );

    assert_eq!(extract_date_time("on May 15", now), None);
    assert_eq!(parse_date_time("on May 15", now), Some(at(2024, 5, 15, 9, 0)));
}

#[test]
fn test_deadline_parser_rolls_past_dates_to_next_year() {
    let now = at(2024, 6, 1, 10, 0);
    assert_eq!(parse_date_time("by May 15", now), Some(at(2025, 5, 15, 9, 0)));
}

#[test]
fn test_suggest_empty_partial_returns_catalog_head() {
    let catalog = default_catalog();
    let head = suggest("", &catalog, 4);
    assert_eq!(
        head,
        catalog[..4].iter().map(String::as_str).collect::<Vec<_>>()
    );
}

#[test]
fn test_suggest_filters_case_insensitively_in_order() {
    let catalog = default_catalog();
    let hits = suggest("remind", &catalog, 3);
    assert!(hits.len() <= 3);
    assert!(hits.iter().all(|s| s.to_lowercase().contains("remind")));

    // Catalog order is preserved among the hits
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| catalog.iter().position(|e| e == hit).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_idempotence_across_the_surface() {
    let classifier = IntentClassifier::new();
    let catalog = default_catalog();
    let now = at(2024, 5, 5, 9, 0);

    for _ in 0..3 {
        assert_eq!(classifier.classify("remind me at 8pm"), Intent::Reminder);
        assert_eq!(
            extract_date_time("next week", now),
            Some(at(2024, 5, 12, 9, 0))
        );
        assert_eq!(suggest("news", &catalog, 3).len(), 1);
    }
}

#[test]
fn test_interpreter_never_panics_on_hostile_input() {
    let classifier = IntentClassifier::new();
    let catalog = default_catalog();
    let now = at(2024, 1, 1, 0, 0);

    let long_input = "x".repeat(10_000);
    for input in [
        "",
        " ",
        "\u{0}\u{1}\u{2}",
        "at at at at",
        "🦀🦀🦀 remind 🦀",
        "at 99:99pm tomorrow never",
        long_input.as_str(),
    ] {
        let _ = classifier.classify(input);
        let _ = extract_date_time(input, now);
        let _ = suggest(input, &catalog, 3);
    }
}

#[test]
fn golden_classification_battery() {
    let classifier = IntentClassifier::new();
    let commands = [
        "add a task to buy groceries tomorrow",
        "remind me to call mom at 6pm",
        "what's the weather like today?",
        "show me the latest technology news",
        "how do I create a reminder?",
        "fly me to the moon",
    ];

    let report: String = commands
        .iter()
        .map(|c| format!("{} => {}\n", c, classifier.classify(c)))
        .collect();

    insta::assert_snapshot!(report, @r###"
    add a task to buy groceries tomorrow => task
    remind me to call mom at 6pm => reminder
    what's the weather like today? => weather
    show me the latest technology news => news
    how do I create a reminder? => reminder
    fly me to the moon => unknown
    "###);
}
