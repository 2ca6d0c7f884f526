use std::fmt::Display;

use serde::Serialize;

use crate::types::{PathResult, PointOfInterest};

/// Fills one of the route form fields with the id of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum PopupAction {
    SetSource(i64),
    SetSink(i64),
}

impl PopupAction {
    /// Id of the form field the action writes to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::SetSource(_) => "source",
            Self::SetSink(_) => "sink",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SetSource(_) => "set as source",
            Self::SetSink(_) => "set as sink",
        }
    }

    pub fn poi_id(&self) -> i64 {
        match self {
            Self::SetSource(id) | Self::SetSink(id) => *id,
        }
    }

    fn to_html(self) -> String {
        format!(
            "<input type='button' value='{}' onclick='document.getElementById(\"{}\").value={}'>",
            self.label(),
            self.field(),
            self.poi_id()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoiPopup {
    pub title: String,
    pub actions: [PopupAction; 2],
}

impl PoiPopup {
    pub fn new(poi: &PointOfInterest) -> Self {
        Self {
            title: format!("{} (id {})", poi.name(), poi.id()),
            actions: [PopupAction::SetSource(poi.id()), PopupAction::SetSink(poi.id())],
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = escape_html(&self.title);
        for action in self.actions {
            html.push_str("<br>");
            html.push_str(&action.to_html());
        }
        html
    }
}

impl Display for PoiPopup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPopup {
    pub score: f64,
    pub upper_bound: f64,
    pub length: f64,
}

impl PathPopup {
    pub fn new(path: &PathResult) -> Self {
        Self {
            score: path.score(),
            upper_bound: path.upper_bound(),
            length: path.length(),
        }
    }
}

impl Display for PathPopup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "score: {} ({} upper bound), length: {}",
            self.score, self.upper_bound, self.length
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
