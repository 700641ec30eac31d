use crux_core::testing::AppTester;
use shared::{App, Effect, Event, Model, SearchResults};

fn query(text: &str) -> Event {
    Event::SearchQueryChanged {
        text: text.to_string(),
    }
}

#[test]
fn engineer_finds_both_engineering_templates() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(query("engineer"), &mut model);

    let SearchResults::Matches { templates, .. } = app.view(&model).sidebar.results else {
        panic!("expected matches");
    };
    let templates = templates.expect("templates section");
    assert_eq!(templates.heading, "Templates");
    assert!(templates.items.contains(&"Software Engineer".to_string()));
    assert!(templates.items.contains(&"Network Engineer".to_string()));
}

#[test]
fn unmatched_query_shows_placeholder() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(query("zzz"), &mut model);

    match app.view(&model).sidebar.results {
        SearchResults::NoResults { message } => assert!(message.contains("zzz")),
        other => panic!("expected no results, got {other:?}"),
    }
}

#[test]
fn submitted_searches_are_remembered_once() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let initial = model.sidebar.history.len();

    app.update(Event::SearchFocusChanged { focused: true }, &mut model);
    app.update(query("Cloud architect"), &mut model);
    let update = app.update(
        Event::SearchSubmitted {
            text: "Cloud architect".into(),
        },
        &mut model,
    );
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));

    let view = app.view(&model).sidebar;
    assert_eq!(view.query, "");
    assert!(!view.search_focused);
    assert_eq!(model.sidebar.history[0], "Cloud architect");
    assert_eq!(model.sidebar.history.len(), initial + 1);

    app.update(
        Event::SearchSubmitted {
            text: "Cloud architect".into(),
        },
        &mut model,
    );
    assert_eq!(model.sidebar.history.len(), initial + 1);
}

#[test]
fn selecting_history_fills_the_query() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::HistoryItemSelected {
            item: "Database Administrator".into(),
        },
        &mut model,
    );

    let view = app.view(&model).sidebar;
    assert_eq!(view.query, "Database Administrator");
    let SearchResults::Matches { history, .. } = view.results else {
        panic!("expected matches");
    };
    let history = history.expect("history section");
    assert_eq!(history.heading, "Recent Searches");
    assert_eq!(history.items.len(), 1);
}

#[test]
fn removing_from_a_filtered_list_removes_the_right_entry() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(query("security"), &mut model);
    let SearchResults::Matches { history, .. } = app.view(&model).sidebar.results else {
        panic!("expected matches");
    };
    let entry = history.expect("history section").items.remove(0);
    assert_eq!(entry.text, "Computer security");

    app.update(Event::HistoryItemRemoved { index: entry.index }, &mut model);
    assert!(!model.sidebar.history.iter().any(|h| h == "Computer security"));
    assert!(model.sidebar.history.iter().any(|h| h == "Computer Systems Analyst"));
}

#[test]
fn boards_are_always_listed() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(query("zzz"), &mut model);

    let view = app.view(&model).sidebar;
    assert_eq!(view.boards, vec!["Board 1", "Board 2", "Board 3"]);
    assert_eq!(view.locked_boards.len(), 3);
}
