use serde_json::{json, Value};
use shared::{CalendarCommand, CommandResponse, DayStatus, StepMode, WindowRequest};
use week_calendar::backend::io::{get_window, handle_command, resolve_date, resolve_index};
use week_calendar::config::CalendarConfig;
use week_calendar::{initialize_with_config, AppState};

fn state() -> AppState {
    initialize_with_config(CalendarConfig::default()).unwrap()
}

fn bounded_request(mode: StepMode) -> WindowRequest {
    WindowRequest {
        current: "2024-01-10".to_string(),
        first_day: Some(0),
        min_date: Some("2024-01-01".to_string()),
        max_date: Some("2024-01-21".to_string()),
        mode,
        generated_for: None,
        disabled_by_default: false,
    }
}

fn run(state: &AppState, command: Value) -> CommandResponse {
    let command: CalendarCommand = serde_json::from_value(command).unwrap();
    handle_command(state, &command)
}

fn ok(response: CommandResponse) -> Value {
    match response {
        CommandResponse::Ok { result } => result,
        CommandResponse::Error { message } => panic!("command failed: {}", message),
    }
}

#[test]
fn test_bounded_week_window() {
    let response = get_window(&state(), &bounded_request(StepMode::BoundedWeeks)).unwrap();

    let anchors: Vec<&str> = response.pages.iter().map(|p| p.anchor.as_str()).collect();
    assert_eq!(anchors, vec!["2023-12-31", "2024-01-07", "2024-01-14", "2024-01-21"]);
    assert_eq!(response.pages[0].days[0], "2023-12-31");
    assert_eq!(response.pages[0].days[6], "2024-01-06");
    assert_eq!(response.scroll_page, Some(1));
}

#[test]
fn test_bounded_day_window_starts_with_padding() {
    let response = get_window(&state(), &bounded_request(StepMode::BoundedDays)).unwrap();

    assert_eq!(response.days[0].date, "2023-12-29");
    assert!(response.days[0].is_padding);
    assert_eq!(response.days[3].date, "2024-01-01");
    assert!(!response.days[3].is_padding);
    assert_eq!(response.scroll_index, Some(12));
}

#[test]
fn test_resolve_round_trip() {
    let state = state();
    let window = bounded_request(StepMode::BoundedDays);

    let located = resolve_date(
        &state,
        &shared::ResolveDateRequest {
            window: window.clone(),
            date: "2024-01-15".to_string(),
        },
    )
    .unwrap();
    let index = located.index.unwrap();

    let resolved = resolve_index(
        &state,
        &shared::ResolveIndexRequest {
            window,
            index: index as i64,
        },
    )
    .unwrap();
    assert_eq!(resolved.date, "2024-01-15");
    assert!(!resolved.is_padding);
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let state = state();
    let window = serde_json::to_value(bounded_request(StepMode::BoundedDays)).unwrap();

    for index in [-1, 30] {
        let response = run(&state, json!({ "command": "resolve_index", "window": window, "index": index }));
        match response {
            CommandResponse::Error { message } => assert!(message.contains("outside the materialized window")),
            other => panic!("expected an error, got {:?}", other),
        }
    }
}

#[test]
fn test_inverted_range_is_rejected() {
    let response = run(
        &state(),
        json!({
            "command": "window",
            "current": "2024-01-15",
            "min_date": "2024-02-01",
            "max_date": "2024-01-01",
            "mode": "bounded_weeks"
        }),
    );
    match response {
        CommandResponse::Error { message } => assert!(message.contains("Invalid range")),
        other => panic!("expected an error, got {:?}", other),
    }
}

#[test]
fn test_monday_week() {
    let result = ok(run(
        &state(),
        json!({ "command": "window", "current": "2024-03-15", "first_day": 1 }),
    ));

    assert_eq!(result["pages"][2]["anchor"], "2024-03-11");
    assert_eq!(result["pages"][2]["days"][6], "2024-03-17");
    assert_eq!(result["scroll_page"], 2);
}

#[test]
fn test_external_change_regenerates_and_scroll_change_does_not() {
    let state = state();
    let window = json!({ "current": "2024-05-01" });

    let external = ok(run(
        &state,
        json!({ "command": "date_changed", "previous": "2024-03-15", "window": window, "source": "external" }),
    ));
    assert_eq!(external["window"]["pages"][2]["anchor"], "2024-04-28");

    let scrolled = ok(run(
        &state,
        json!({ "command": "date_changed", "previous": "2024-03-15", "window": window, "source": "week_scroll" }),
    ));
    assert!(scrolled["window"].is_null());
}

#[test]
fn test_scroll_to_last_page_recentres() {
    let result = ok(run(
        &state(),
        json!({ "command": "scroll_settled", "window": { "current": "2024-03-15" }, "page": 4 }),
    ));

    assert_eq!(result["date"], "2024-03-24");
    assert_eq!(result["window"]["scroll_page"], 2);
    assert_eq!(result["window"]["pages"][2]["anchor"], "2024-03-24");
    assert!(result["boundary"].is_null());
}

#[test]
fn test_selection_marks_current_date() {
    let result = ok(run(
        &state(),
        json!({
            "command": "selection",
            "current": "2024-03-15",
            "marked_dates": { "2024-03-20": { "marked": true } }
        }),
    ));

    assert_eq!(result["marked_dates"]["2024-03-15"]["selected"], true);
    assert_eq!(result["marked_dates"]["2024-03-20"]["selected"], false);
}

#[test]
fn test_week_scroll_keeps_resolving_against_held_window() {
    let state = state();

    let window = ok(run(&state, json!({ "command": "window", "current": "2024-03-15" })));
    let generated_for = window["generated_for"].as_str().unwrap().to_string();
    assert_eq!(generated_for, "2024-03-15");

    // The user swipes one page forward; the strip moves the current date itself
    let page_three = ok(run(
        &state,
        json!({ "command": "scroll_settled", "window": { "current": "2024-03-15", "generated_for": generated_for }, "page": 3 }),
    ));
    assert_eq!(page_three["date"], "2024-03-17");
    assert!(page_three["window"].is_null());

    let changed = ok(run(
        &state,
        json!({
            "command": "date_changed",
            "previous": "2024-03-15",
            "window": { "current": "2024-03-17", "generated_for": generated_for },
            "source": "week_scroll"
        }),
    ));
    assert!(changed["window"].is_null());

    // The held list is still the one generated for Mar 15
    let page_four = ok(run(
        &state,
        json!({ "command": "scroll_settled", "window": { "current": "2024-03-17", "generated_for": generated_for }, "page": 4 }),
    ));
    assert_eq!(page_four["date"], "2024-03-24");
    assert_eq!(page_four["window"]["generated_for"], "2024-03-24");
    assert_eq!(page_four["window"]["pages"][2]["anchor"], "2024-03-24");
    assert_eq!(page_four["window"]["scroll_page"], 2);

    let located = ok(run(
        &state,
        json!({
            "command": "resolve_date",
            "window": { "current": "2024-03-17", "generated_for": generated_for },
            "date": "2024-03-17"
        }),
    ));
    assert_eq!(located["page"], 3);
    assert_eq!(located["index"], 21);
}

#[test]
fn test_bounded_window_rejects_current_past_maximum() {
    let response = run(
        &state(),
        json!({
            "command": "window",
            "current": "2024-06-01",
            "max_date": "2024-01-20",
            "mode": "bounded_weeks"
        }),
    );
    match response {
        CommandResponse::Error { message } => assert!(message.contains("Invalid range")),
        other => panic!("expected an error, got {:?}", other),
    }
}

#[test]
fn test_resolve_offset_snaps_ties_to_later_day() {
    let state = state();
    let window = serde_json::to_value(bounded_request(StepMode::BoundedDays)).unwrap();

    let tie = ok(run(
        &state,
        json!({ "command": "resolve_offset", "window": window, "offset": 125.0, "item_width": 50.0 }),
    ));
    assert_eq!(tie["date"], "2024-01-01");
    assert_eq!(tie["is_padding"], false);

    let padding = ok(run(
        &state,
        json!({ "command": "resolve_offset", "window": window, "offset": 124.0, "item_width": 50.0 }),
    ));
    assert_eq!(padding["date"], "2023-12-31");
    assert_eq!(padding["is_padding"], true);

    let response = run(
        &state,
        json!({ "command": "resolve_offset", "window": window, "offset": 10.0, "item_width": 0.0 }),
    );
    assert!(matches!(response, CommandResponse::Error { .. }));
}

#[test]
fn test_window_reports_day_status_and_names() {
    let response = get_window(&state(), &bounded_request(StepMode::BoundedDays)).unwrap();

    assert_eq!(response.day_names[0], "Sun");
    assert_eq!(response.day_names[6], "Sat");
    // Padding days sit before the minimum date
    assert_eq!(response.days[0].status, DayStatus::Disabled);
    assert_eq!(response.days[12].date, "2024-01-10");
    assert_eq!(response.days[12].status, DayStatus::Today);
    // Jan 27 closes the last week but lies past the maximum
    assert_eq!(response.days.last().unwrap().status, DayStatus::Disabled);

    let mut disabled = bounded_request(StepMode::BoundedDays);
    disabled.disabled_by_default = true;
    let response = get_window(&state(), &disabled).unwrap();
    assert!(response.days.iter().all(|day| day.status == DayStatus::Disabled));
}

#[test]
fn test_resolve_date_reports_clamped_boundary() {
    let state = state();
    let window = bounded_request(StepMode::BoundedDays);

    let before = resolve_date(
        &state,
        &shared::ResolveDateRequest {
            window: window.clone(),
            date: "2023-11-01".to_string(),
        },
    )
    .unwrap();
    assert_eq!(before.resolved, "2024-01-01");
    assert_eq!(before.boundary.as_deref(), Some("min"));
    assert_eq!(before.index, Some(3));

    let inside = resolve_date(
        &state,
        &shared::ResolveDateRequest {
            window,
            date: "2024-01-15".to_string(),
        },
    )
    .unwrap();
    assert_eq!(inside.boundary, None);
    assert_eq!(inside.resolved, "2024-01-15");
}
