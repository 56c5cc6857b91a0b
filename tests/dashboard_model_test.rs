//! Integration tests for the dashboard document model
//!
//! These exercise the pure construction and mutation rules end to end,
//! including the exact wire-format JSON the service expects.

use dashkit::domain::{Dashboard, Row, Template, Templating};

#[test]
fn test_new_dashboard_title_and_empty_rows() {
    for title in ["demo", "", "CPU / memory (prod)"] {
        let dashboard = Dashboard::new(title);
        assert_eq!(dashboard.title, title);
        assert!(dashboard.rows.is_empty());
    }
}

#[test]
fn test_new_row_single_panel_carries_query() {
    let row = Row::new("throughput", "SELECT count(\"value\") FROM \"requests\"");
    assert_eq!(row.panels.len(), 1);
    assert_eq!(row.panels[0].targets.len(), 1);
    assert_eq!(
        row.panels[0].targets[0].query,
        "SELECT count(\"value\") FROM \"requests\""
    );
}

#[test]
fn test_add_row_appends_and_preserves_order() {
    let mut dashboard = Dashboard::new("demo");
    for i in 0..5 {
        let before = dashboard.rows.len();
        dashboard = dashboard.add_row(&format!("panel-{i}"), &format!("SELECT {i}"));
        assert_eq!(dashboard.rows.len(), before + 1);
    }

    let titles: Vec<&str> = dashboard
        .rows
        .iter()
        .map(|r| r.panels[0].title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["panel-0", "panel-1", "panel-2", "panel-3", "panel-4"]
    );
}

#[test]
fn test_add_row_leaves_prior_rows_unchanged() {
    let one = Dashboard::new("demo").add_row("first", "SELECT 1");
    let two = one.add_row("second", "SELECT 2");

    assert_eq!(two.rows[0], one.rows[0]);
    assert_eq!(one.rows.len(), 1);
}

#[test]
fn test_templating_second_call_wins() {
    let dashboard = Dashboard::new("demo")
        .with_templating(&["host", "region"], "cpu.load", "influx")
        .with_templating(&["az"], "cpu.load", "influx");

    let names: Vec<&str> = dashboard
        .templating
        .list
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["az"]);
}

#[test]
fn test_generated_tag_query_shape() {
    for tag in ["host", "data center", "région"] {
        let template = Template::new(tag, "cpu.load", "influx");
        assert_eq!(
            template.query,
            format!("SHOW TAG VALUES FROM \"cpu.load\" WITH KEY = \"{tag}\"")
        );
    }
}

#[test]
fn test_templating_from_owned_and_borrowed_tags() {
    let owned = vec!["host".to_string()];
    let borrowed = ["host"];
    assert_eq!(
        Templating::new(&owned, "m", "d"),
        Templating::new(&borrowed, "m", "d")
    );
}

// The end-to-end construction flow: build, serialize, inspect the wire
// document a service would receive.
#[test]
fn test_end_to_end_document_json() {
    let dashboard = Dashboard::new("demo")
        .add_row("p1", "SELECT 1")
        .with_templating(&["host"], "cpu.load", "influx");

    let json = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["title"], "demo");

    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let panels = rows[0]["panels"].as_array().unwrap();
    assert_eq!(panels.len(), 1);
    assert_eq!(panels[0]["title"], "p1");
    assert_eq!(panels[0]["targets"][0]["query"], "SELECT 1");
    assert_eq!(panels[0]["targets"][0]["refId"], "A");

    let variables = json["templating"]["list"].as_array().unwrap();
    assert_eq!(variables.len(), 1);
    assert_eq!(variables[0]["name"], "host");
    assert_eq!(
        variables[0]["query"],
        "SHOW TAG VALUES FROM \"cpu.load\" WITH KEY = \"host\""
    );

    // Raw text also carries the exact title key, the way the service sees it
    let text = serde_json::to_string(&dashboard).unwrap();
    assert!(text.contains("\"title\":\"demo\""));
}

#[test]
fn test_schema_and_document_version_fixed_at_creation() {
    let dashboard = Dashboard::new("demo")
        .add_row("p1", "SELECT 1")
        .with_templating(&["host"], "cpu.load", "influx");

    assert_eq!(dashboard.schema_version, 14);
    assert_eq!(dashboard.version, 1);
}
