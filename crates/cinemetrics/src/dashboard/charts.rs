use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Scatter,
}

/// Field bindings and axis options for one chart, addressed to whatever
/// plotting front end consumes the dashboard payload. `x`/`y`/`color`/`hover`
/// name fields of the section's rows.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x: &'static str,
    pub y: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hover: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_angle: Option<i16>,
    pub log_x: bool,
    pub markers: bool,
}

/// A heading, a chart specification, and the rows that feed it. Sections are
/// rendered in the order they appear on the dashboard; rendering never feeds
/// back into the data.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSection<T> {
    pub heading: &'static str,
    pub spec: ChartSpec,
    pub rows: Vec<T>,
}
