//! Transit lines.

use serde::{Deserialize, Serialize};

use super::LineId;

/// Display colours for a line. Not used by any game algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub primary: String,
    pub secondary: String,
    pub font: String,
}

/// A transit line.
///
/// A line induces a total order over the stations that carry a
/// `line_orders` entry for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
}

impl Line {
    /// Create an unstyled line.
    pub fn new(id: LineId) -> Self {
        Self { id, style: None }
    }

    /// Attach display colours.
    pub fn with_style(mut self, primary: &str, secondary: &str, font: &str) -> Self {
        self.style = Some(LineStyle {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            font: font.to_string(),
        });
        self
    }
}
