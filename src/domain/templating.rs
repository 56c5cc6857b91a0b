//! Templating variables
//!
//! Template variables parameterize a dashboard: each one is populated from
//! the tag values of a measurement and can be used to filter every panel
//! on the page interactively.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The dashboard-level block of template variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templating {
    pub list: Vec<Template>,
}

impl Templating {
    /// Creates one query-backed variable per tag name
    ///
    /// # Examples
    ///
    /// ```
    /// use dashkit::domain::Templating;
    ///
    /// let templating = Templating::new(&["host"], "cpu.load", "influx");
    /// assert_eq!(templating.list.len(), 1);
    /// assert_eq!(
    ///     templating.list[0].query,
    ///     r#"SHOW TAG VALUES FROM "cpu.load" WITH KEY = "host""#
    /// );
    /// ```
    pub fn new<S: AsRef<str>>(tag_names: &[S], measurement: &str, datasource: &str) -> Self {
        Templating {
            list: tag_names
                .iter()
                .map(|tag| Template::new(tag.as_ref(), measurement, datasource))
                .collect(),
        }
    }
}

/// One template variable bound to a tag of a measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub current: TemplateCurrent,
    pub datasource: String,
    pub hide: i64,
    #[serde(rename = "includeAll")]
    pub include_all: bool,
    pub label: String,
    pub multi: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<TemplateOption>,
    pub query: String,
    pub refresh: i64,
    pub regex: String,
    pub sort: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "useTags")]
    pub use_tags: bool,
}

impl Template {
    /// Creates a multi-select query variable over the tag's values
    ///
    /// The generated query is exactly
    /// `SHOW TAG VALUES FROM "<measurement>" WITH KEY = "<tag>"`.
    pub fn new(tag_name: &str, measurement: &str, datasource: &str) -> Self {
        Template {
            current: TemplateCurrent::default(),
            datasource: datasource.to_string(),
            hide: 0,
            include_all: false,
            label: tag_name.to_string(),
            multi: true,
            name: tag_name.to_string(),
            options: Vec::new(),
            query: format!("SHOW TAG VALUES FROM \"{measurement}\" WITH KEY = \"{tag_name}\""),
            refresh: 1,
            regex: String::new(),
            sort: 0,
            kind: "query".to_string(),
            use_tags: false,
        }
    }
}

/// The variable's currently selected value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateCurrent {
    pub tags: Option<Vec<Value>>,
    pub text: String,
    pub value: Option<Value>,
}

/// One selectable option of a template variable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOption {
    pub selected: bool,
    pub text: String,
    pub value: String,
}
