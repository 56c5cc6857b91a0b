//! Dashboard document model
//!
//! This module defines the dashboard document a Grafana-compatible service
//! accepts: a titled page of rows, each row holding panels, each panel
//! bound to time-series queries (targets). All types are plain value
//! objects; constructing and mutating them performs no I/O.
//!
//! Field names are fixed wire-format keys and must be reproduced exactly
//! for compatibility with the service, hence the serde renames. Fields the
//! library never interprets (`links`, `tags`, panel overrides, repeat
//! settings) are carried as opaque JSON so documents round-trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::templating::Templating;

/// Refresh intervals offered by the time picker on a default dashboard.
const REFRESH_INTERVALS: [&str; 10] = [
    "5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d",
];

/// Quick time ranges offered by the time picker on a default dashboard.
const TIME_OPTIONS: [&str; 10] = [
    "5m", "15m", "1h", "6h", "12h", "24h", "2d", "4d", "7d", "30d",
];

/// A complete dashboard document
///
/// `schema_version` and `version` are set once at construction and never
/// mutated by this library; only the remote service advances `version`.
///
/// # Examples
///
/// ```
/// use dashkit::domain::Dashboard;
///
/// let dashboard = Dashboard::new("cpu overview")
///     .add_row("load", r#"SELECT mean("load") FROM "cpu""#);
/// assert_eq!(dashboard.rows.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub editable: bool,
    #[serde(rename = "gnetId")]
    pub gnet_id: Option<Value>,
    #[serde(rename = "graphTooltip")]
    pub graph_tooltip: i64,
    #[serde(rename = "hideControls")]
    pub hide_controls: bool,
    /// Numeric identifier assigned by the service; 0 for a new dashboard
    pub id: i64,
    /// Opaque pass-through, preserved for round-trip fidelity
    pub links: Vec<Value>,
    pub rows: Vec<Row>,
    #[serde(rename = "schemaVersion")]
    pub schema_version: i64,
    pub style: String,
    /// Opaque pass-through, preserved for round-trip fidelity
    pub tags: Vec<Value>,
    pub templating: Templating,
    pub time: Time,
    pub timepicker: Timepicker,
    pub timezone: String,
    pub title: String,
    pub version: i64,
}

impl Dashboard {
    /// Creates a dashboard with no rows and the default presentation
    ///
    /// Defaults: schema version 14, dark style, browser timezone, editable,
    /// a 6-hour time window and the standard time-picker options.
    pub fn new(title: impl Into<String>) -> Self {
        Dashboard {
            editable: true,
            gnet_id: None,
            graph_tooltip: 0,
            hide_controls: false,
            id: 0,
            links: Vec::new(),
            rows: Vec::new(),
            schema_version: 14,
            style: "dark".to_string(),
            tags: Vec::new(),
            templating: Templating::default(),
            time: Time {
                from: "now-6h".to_string(),
                to: "now".to_string(),
            },
            timepicker: Timepicker::new(),
            timezone: "browser".to_string(),
            title: title.into(),
            version: 1,
        }
    }

    /// Returns a copy of this dashboard with one more row appended
    ///
    /// The new row holds a single graph panel querying `query`. The
    /// receiver is not modified; existing rows keep their order.
    pub fn add_row(&self, panel_title: &str, query: &str) -> Dashboard {
        let mut next = self.clone();
        next.rows.push(Row::new(panel_title, query));
        next
    }

    /// Returns a copy of this dashboard with its templating block replaced
    ///
    /// The previous templating variables are discarded wholesale; one
    /// variable per entry in `tag_names` takes their place.
    pub fn with_templating<S: AsRef<str>>(
        &self,
        tag_names: &[S],
        measurement: &str,
        datasource: &str,
    ) -> Dashboard {
        let mut next = self.clone();
        next.templating = Templating::new(tag_names, measurement, datasource);
        next
    }
}

/// Dashboard time range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Time {
    pub from: String,
    pub to: String,
}

/// Time-picker options shown in the dashboard chrome
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timepicker {
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
}

impl Timepicker {
    /// Creates a time picker with the standard interval and range options
    pub fn new() -> Self {
        Timepicker {
            refresh_intervals: REFRESH_INTERVALS.iter().map(|s| s.to_string()).collect(),
            time_options: TIME_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One row of panels on a dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub collapse: bool,
    pub height: String,
    pub panels: Vec<Panel>,
    pub repeat: Option<Value>,
    #[serde(rename = "repeatIteration")]
    pub repeat_iteration: Option<Value>,
    #[serde(rename = "repeatRowId")]
    pub repeat_row_id: Option<Value>,
    #[serde(rename = "showTitle")]
    pub show_title: bool,
    pub title: String,
    #[serde(rename = "titleSize")]
    pub title_size: String,
}

impl Row {
    /// Creates a 250px row containing exactly one default panel for `query`
    pub fn new(panel_title: &str, query: &str) -> Self {
        Row {
            collapse: false,
            height: "250px".to_string(),
            panels: vec![Panel::new(panel_title, query)],
            repeat: None,
            repeat_iteration: None,
            repeat_row_id: None,
            show_title: false,
            title: String::new(),
            title_size: "h6".to_string(),
        }
    }
}

/// A single chart on a row
///
/// The default constructor produces a line-graph preset: flot renderer,
/// fill 1, line width 1, full-width span, one raw query target and two
/// identical Y-axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Panel {
    #[serde(rename = "aliasColors")]
    pub alias_colors: serde_json::Map<String, Value>,
    pub bars: bool,
    pub datasource: Option<Value>,
    pub fill: i64,
    pub id: i64,
    pub legend: Legend,
    pub lines: bool,
    #[serde(rename = "linewidth")]
    pub line_width: i64,
    pub links: Vec<Value>,
    #[serde(rename = "nullPointMode")]
    pub null_point_mode: String,
    pub percentage: bool,
    #[serde(rename = "pointradius")]
    pub point_radius: i64,
    pub points: bool,
    pub renderer: String,
    #[serde(rename = "seriesOverrides")]
    pub series_overrides: Vec<Value>,
    pub span: i64,
    pub stack: bool,
    #[serde(rename = "steppedLine")]
    pub stepped_line: bool,
    pub targets: Vec<Target>,
    pub thresholds: Vec<Value>,
    #[serde(rename = "timeFrom")]
    pub time_from: Option<Value>,
    #[serde(rename = "timeShift")]
    pub time_shift: Option<Value>,
    pub title: String,
    pub tooltip: Tooltip,
    #[serde(rename = "type")]
    pub kind: String,
    pub xaxis: Xaxis,
    pub yaxes: Vec<Yaxis>,
}

impl Panel {
    /// Creates a graph panel with one default target for `query`
    pub fn new(title: &str, query: &str) -> Self {
        Panel {
            alias_colors: serde_json::Map::new(),
            bars: false,
            datasource: None,
            fill: 1,
            id: 0,
            legend: Legend::new(),
            lines: true,
            line_width: 1,
            links: Vec::new(),
            null_point_mode: "null".to_string(),
            percentage: false,
            point_radius: 5,
            points: false,
            renderer: "flot".to_string(),
            series_overrides: Vec::new(),
            span: 12,
            stack: false,
            stepped_line: false,
            targets: vec![Target::new(query)],
            thresholds: Vec::new(),
            time_from: None,
            time_shift: None,
            title: title.to_string(),
            tooltip: Tooltip::new(),
            kind: "graph".to_string(),
            xaxis: Xaxis::new(),
            yaxes: vec![Yaxis::new(), Yaxis::new()],
        }
    }
}

/// Panel legend display flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    pub avg: bool,
    pub current: bool,
    pub max: bool,
    pub min: bool,
    pub show: bool,
    pub total: bool,
    pub values: bool,
}

impl Legend {
    /// Visible legend with every aggregate column disabled
    pub fn new() -> Self {
        Legend {
            show: true,
            ..Legend::default()
        }
    }
}

/// One query against a time-series measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    #[serde(rename = "dsType")]
    pub ds_type: String,
    #[serde(rename = "groupBy")]
    pub group_by: Vec<QueryPart>,
    pub measurement: String,
    pub policy: String,
    pub query: String,
    #[serde(rename = "rawQuery")]
    pub raw_query: bool,
    #[serde(rename = "refId")]
    pub ref_id: String,
    #[serde(rename = "resultFormat")]
    pub result_format: String,
    pub select: Vec<Vec<QueryPart>>,
    pub tags: Vec<Value>,
}

impl Target {
    /// Creates a raw InfluxDB query target with reference id `"A"`
    pub fn new(query: &str) -> Self {
        Target {
            ds_type: "influxdb".to_string(),
            group_by: Vec::new(),
            measurement: String::new(),
            policy: "default".to_string(),
            query: query.to_string(),
            raw_query: true,
            ref_id: "A".to_string(),
            result_format: "time_series".to_string(),
            select: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// One clause of a structured query (group-by or select)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPart {
    pub params: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Panel tooltip behavior
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tooltip {
    pub shared: bool,
    pub sort: i64,
    pub value_type: String,
}

impl Tooltip {
    /// Shared tooltip showing per-series values, unsorted
    pub fn new() -> Self {
        Tooltip {
            shared: true,
            sort: 0,
            value_type: "individual".to_string(),
        }
    }
}

/// Panel X-axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xaxis {
    pub mode: String,
    pub name: Option<Value>,
    pub show: bool,
    pub values: Vec<Value>,
}

impl Xaxis {
    /// Visible time-mode axis
    pub fn new() -> Self {
        Xaxis {
            mode: "time".to_string(),
            name: None,
            show: true,
            values: Vec::new(),
        }
    }
}

/// Panel Y-axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Yaxis {
    pub format: String,
    pub label: Option<Value>,
    #[serde(rename = "logBase")]
    pub log_base: i64,
    pub max: Option<Value>,
    pub min: Option<Value>,
    pub show: bool,
}

impl Yaxis {
    /// Visible linear axis in short format with automatic bounds
    pub fn new() -> Self {
        Yaxis {
            format: "short".to_string(),
            label: None,
            log_base: 1,
            max: None,
            min: None,
            show: true,
        }
    }
}

/// Service-assigned metadata attached to a fetched dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub created: String,
    pub expires: String,
    #[serde(rename = "isHome")]
    pub is_home: bool,
    #[serde(rename = "isSnapshot")]
    pub is_snapshot: bool,
    #[serde(rename = "isStarred")]
    pub is_starred: bool,
    /// URL-safe identifier, distinct from the human-chosen title. Delete
    /// requests are keyed by this slug.
    pub slug: String,
}

/// A dashboard together with its service-assigned metadata
///
/// Returned only by read operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardResult {
    pub meta: Meta,
    pub model: Dashboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dashboard_defaults() {
        let dashboard = Dashboard::new("demo");
        assert_eq!(dashboard.title, "demo");
        assert!(dashboard.rows.is_empty());
        assert_eq!(dashboard.schema_version, 14);
        assert_eq!(dashboard.version, 1);
        assert_eq!(dashboard.style, "dark");
        assert_eq!(dashboard.timezone, "browser");
        assert_eq!(dashboard.time.from, "now-6h");
        assert_eq!(dashboard.time.to, "now");
        assert!(dashboard.editable);
        assert_eq!(dashboard.timepicker.refresh_intervals.len(), 10);
        assert_eq!(dashboard.timepicker.time_options.len(), 10);
    }

    #[test]
    fn test_new_row_contains_exactly_one_panel() {
        let row = Row::new("cpu", "SELECT 1");
        assert_eq!(row.panels.len(), 1);
        assert_eq!(row.height, "250px");
        assert_eq!(row.title_size, "h6");
        assert_eq!(row.panels[0].targets[0].query, "SELECT 1");
    }

    #[test]
    fn test_new_panel_graph_preset() {
        let panel = Panel::new("cpu", "SELECT 1");
        assert_eq!(panel.kind, "graph");
        assert_eq!(panel.renderer, "flot");
        assert_eq!(panel.span, 12);
        assert_eq!(panel.fill, 1);
        assert_eq!(panel.line_width, 1);
        assert_eq!(panel.point_radius, 5);
        assert!(panel.lines);
        assert_eq!(panel.yaxes.len(), 2);
        assert_eq!(panel.yaxes[0], panel.yaxes[1]);
        assert_eq!(panel.targets.len(), 1);
        assert_eq!(panel.targets[0].ref_id, "A");
    }

    #[test]
    fn test_legend_defaults() {
        let legend = Legend::new();
        assert!(legend.show);
        assert!(!legend.avg && !legend.current && !legend.max && !legend.min);
        assert!(!legend.total && !legend.values);
    }

    #[test]
    fn test_add_row_is_append_only() {
        let base = Dashboard::new("demo").add_row("first", "SELECT 1");
        let grown = base.add_row("second", "SELECT 2");

        assert_eq!(base.rows.len(), 1);
        assert_eq!(grown.rows.len(), 2);
        assert_eq!(grown.rows[0], base.rows[0]);
        assert_eq!(grown.rows[1].panels[0].title, "second");
    }

    #[test]
    fn test_with_templating_replaces_wholesale() {
        let dashboard = Dashboard::new("demo")
            .with_templating(&["host", "region"], "cpu.load", "influx")
            .with_templating(&["datacenter"], "cpu.load", "influx");

        assert_eq!(dashboard.templating.list.len(), 1);
        assert_eq!(dashboard.templating.list[0].name, "datacenter");
    }

    #[test]
    fn test_dashboard_wire_keys() {
        let json = serde_json::to_value(Dashboard::new("demo")).unwrap();
        assert_eq!(json["schemaVersion"], 14);
        assert_eq!(json["gnetId"], Value::Null);
        assert_eq!(json["hideControls"], false);
        assert!(json["rows"].as_array().unwrap().is_empty());
        assert_eq!(json["timepicker"]["refresh_intervals"][0], "5s");
    }

    #[test]
    fn test_panel_wire_keys() {
        let json = serde_json::to_value(Panel::new("p", "q")).unwrap();
        assert_eq!(json["type"], "graph");
        assert_eq!(json["nullPointMode"], "null");
        assert_eq!(json["pointradius"], 5);
        assert_eq!(json["linewidth"], 1);
        assert_eq!(json["aliasColors"], serde_json::json!({}));
        assert_eq!(json["tooltip"]["value_type"], "individual");
        assert_eq!(json["yaxes"][1]["logBase"], 1);
        assert_eq!(json["targets"][0]["dsType"], "influxdb");
        assert_eq!(json["targets"][0]["resultFormat"], "time_series");
    }

    #[test]
    fn test_dashboard_result_decodes_partial_meta() {
        let body = r#"{"meta":{"slug":"demo-slug"},"model":{"title":"demo"}}"#;
        let result: DashboardResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.meta.slug, "demo-slug");
        assert!(!result.meta.is_starred);
        assert_eq!(result.model.title, "demo");
        assert!(result.model.rows.is_empty());
    }

    #[test]
    fn test_dashboard_round_trips() {
        let dashboard = Dashboard::new("demo")
            .add_row("p1", "SELECT 1")
            .with_templating(&["host"], "cpu.load", "influx");

        let json = serde_json::to_string(&dashboard).unwrap();
        let decoded: Dashboard = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, dashboard);
    }
}
