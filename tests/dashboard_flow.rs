// tests/dashboard_flow.rs
//
// Drives the command layer end to end against a JSON sheet on disk.

use std::io::Write;
use std::sync::Arc;

use movieclub::application::commands::{
    get_dashboard, get_filter_options, get_summary, list_movies, load_dataset,
};
use movieclub::application::dto::FilterDto;
use movieclub::application::{ErrorResponse, ErrorType};
use movieclub::{AppState, DashboardConfig, InMemoryMovieRepository, JsonFileMovieRepository};
use tempfile::NamedTempFile;

const CLUB_SHEET: &str = r#"[
    {"Title": "A", "Season": "1", "Presented by": "E.", "Duration (min)": "100",
     "Genre": "Drama", "Origin": "US", "RottenTomatoes Rating": "90%"},
    {"Title": "B", "Season": "1", "Presented by": "Eleonore", "Duration (min)": "50",
     "Genre": "Drama,Comedy", "Origin": "FR"},
    {"Title": "Stalker", "Season": 2, "Presented by": "Juanita", "Duration (min)": 161,
     "Genre": "Science Fiction", "Origin": "Soviet Union", "RottenTomatoes Rating": "100%"},
    {"Title": "Untitled Reel", "Season": "2", "Presented by": null, "Duration (min)": "-5"}
]"#;

fn write_sheet(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn state_for(file: &NamedTempFile, config: DashboardConfig) -> AppState {
    AppState::new(Arc::new(JsonFileMovieRepository::new(file.path())), config)
}

fn season_one() -> FilterDto {
    FilterDto {
        season: Some("1".to_string()),
        presenter: Some("All".to_string()),
        search: Some(String::new()),
    }
}

#[test]
fn season_one_dashboard_merges_presenter_aliases() {
    let sheet = write_sheet(CLUB_SHEET);
    let state = state_for(&sheet, DashboardConfig::default());

    assert_eq!(load_dataset(&state).unwrap(), 4);

    let dashboard = get_dashboard(&state, season_one()).unwrap();

    let titles: Vec<_> = dashboard.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);

    assert_eq!(dashboard.summary.total_movies, 2);
    assert_eq!(dashboard.summary.total_minutes, 150);
    assert_eq!(dashboard.summary.unique_presenters, 1);

    let genres: Vec<_> = dashboard
        .genres
        .iter()
        .map(|g| (g.name.as_str(), g.value))
        .collect();
    assert_eq!(genres, vec![("Drama", 2), ("Comedy", 1)]);

    assert_eq!(dashboard.presenters.len(), 1);
    assert_eq!(dashboard.presenters[0].name, "Eleonore");
    assert_eq!(dashboard.presenters[0].movies, 2);
    assert_eq!(dashboard.presenters[0].duration, 150);
}

#[test]
fn season_trend_ignores_the_active_filter() {
    let sheet = write_sheet(CLUB_SHEET);
    let state = state_for(&sheet, DashboardConfig::default());
    load_dataset(&state).unwrap();

    let dashboard = get_dashboard(&state, season_one()).unwrap();

    let trend: Vec<_> = dashboard
        .season_trend
        .iter()
        .map(|s| (s.season.as_str(), s.movies, s.duration))
        .collect();
    assert_eq!(trend, vec![("S1", 2, 150), ("S2", 2, 161)]);

    let watch_time: Vec<_> = dashboard
        .watch_time
        .iter()
        .map(|w| (w.name.as_str(), w.duration))
        .collect();
    assert_eq!(watch_time, vec![("1", 150)]);
}

#[test]
fn unfiltered_dashboard_covers_whole_sheet() {
    let sheet = write_sheet(CLUB_SHEET);
    let state = state_for(&sheet, DashboardConfig::default());
    load_dataset(&state).unwrap();

    let summary = get_summary(&state, FilterDto::default()).unwrap();
    assert_eq!(summary.total_movies, 4);
    // negative duration counts as zero
    assert_eq!(summary.total_minutes, 311);
    assert_eq!(summary.rated_movies, 2);
    assert_eq!(summary.average_rating, 95.0);
    assert_eq!(summary.unique_presenters, 2);

    let options = get_filter_options(&state).unwrap();
    assert_eq!(options.seasons, vec!["1", "2"]);
    assert_eq!(options.presenters, vec!["Eleonore", "Juan"]);
}

#[test]
fn origin_chart_labels_are_truncated_but_table_is_not() {
    let sheet = write_sheet(CLUB_SHEET);
    let config = DashboardConfig {
        origin_label_max: 6,
        ..DashboardConfig::default()
    };
    let state = state_for(&sheet, config);
    load_dataset(&state).unwrap();

    let dashboard = get_dashboard(&state, FilterDto::default()).unwrap();

    let chart: Vec<_> = dashboard.top_origins.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(chart, vec!["US", "FR", "Soviet..."]);

    let table: Vec<_> = dashboard.origins.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(table, vec!["US", "FR", "Soviet Union", "Unknown"]);
}

#[test]
fn search_is_case_insensitive() {
    let sheet = write_sheet(CLUB_SHEET);
    let state = state_for(&sheet, DashboardConfig::default());
    load_dataset(&state).unwrap();

    let rows = list_movies(
        &state,
        FilterDto {
            search: Some("STAL".to_string()),
            ..FilterDto::default()
        },
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Stalker");
    assert_eq!(rows[0].presenter.as_deref(), Some("Juan"));
    assert_eq!(rows[0].season, "2");
}

#[test]
fn querying_before_load_reports_not_loaded() {
    let sheet = write_sheet(CLUB_SHEET);
    let state = state_for(&sheet, DashboardConfig::default());

    let err = get_dashboard(&state, FilterDto::default()).unwrap_err();
    let response: ErrorResponse = serde_json::from_str(&err).unwrap();

    assert!(!response.success);
    assert_eq!(response.error_type, ErrorType::NotLoaded);
}

#[test]
fn malformed_sheet_reports_invalid_data() {
    let sheet = write_sheet("{ not a list");
    let state = state_for(&sheet, DashboardConfig::default());

    let err = load_dataset(&state).unwrap_err();
    let response: ErrorResponse = serde_json::from_str(&err).unwrap();

    assert_eq!(response.error_type, ErrorType::InvalidData);
}

#[test]
fn missing_file_reports_file_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Arc::new(JsonFileMovieRepository::new(dir.path().join("movies.json"))),
        DashboardConfig::default(),
    );

    let err = load_dataset(&state).unwrap_err();
    let response: ErrorResponse = serde_json::from_str(&err).unwrap();

    assert_eq!(response.error_type, ErrorType::FileSystem);
}

#[test]
fn repeated_queries_keep_event_log_bounded() {
    let repo = InMemoryMovieRepository::from_json_str(r#"[{"Title": "Heat", "Season": "1"}]"#)
        .unwrap();
    let config = DashboardConfig {
        event_log_capacity: 16,
        ..DashboardConfig::default()
    };
    let state = AppState::new(Arc::new(repo), config);
    load_dataset(&state).unwrap();

    for _ in 0..10_000 {
        get_dashboard(&state, FilterDto::default()).unwrap();
    }

    let log = state.event_bus.get_event_log();
    assert_eq!(log.len(), 16);
    assert!(log.iter().all(|entry| entry.event_type == "DashboardComputed"));
}
