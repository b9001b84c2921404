// ============================================================
// FIGURE TYPES
// ============================================================
// Plotly-schema chart model, serialized to JSON and drawn client-side

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Shared plot and page canvas color
const BACKGROUND_COLOR: &str = "#1a1c23";

/// Text color on the dark canvas
const FONT_COLOR: &str = "#ffffff";

/// Axis line and tick label color
const AXIS_COLOR: &str = "#cccccc";

/// Fixed chart height in pixels
const REPORT_HEIGHT: u32 = 600;

/// Uniform margin on all four sides in pixels
const REPORT_MARGIN: u32 = 50;

/// A complete Plotly figure: trace list plus layout.
///
/// The serialized form follows the Plotly figure schema so the browser can
/// hand it to `Plotly.newPlot` unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Serialize to the JSON string embedded in the report page.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One Plotly trace. The `type` tag uses Plotly's wire names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        name: String,
        x: Vec<String>,
        y: Vec<f64>,
    },
    Scatter {
        name: String,
        mode: String,
        x: Vec<f64>,
        y: Vec<f64>,
        hovertext: Vec<String>,
        marker: Marker,
    },
    Box {
        name: String,
        x: Vec<String>,
        y: Vec<f64>,
    },
}

impl Trace {
    /// Trace name shown in the legend (the region for every chart variant).
    pub fn name(&self) -> &str {
        match self {
            Trace::Bar { name, .. } => name,
            Trace::Scatter { name, .. } => name,
            Trace::Box { name, .. } => name,
        }
    }

    /// Number of data points carried by this trace.
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Bar { x, .. } => x.len(),
            Trace::Scatter { x, .. } => x.len(),
            Trace::Box { y, .. } => y.len(),
        }
    }
}

/// Marker sizing for bubble scatters. Sizes are raw data values; `sizeref`
/// scales them so the largest bubble hits the configured pixel cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub size: Vec<f64>,
    pub sizemode: String,
    pub sizeref: f64,
}

/// Chart layout: title plus the shared dark presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font: Font,
    pub autosize: bool,
    pub margin: Margin,
    pub height: u32,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

impl Layout {
    /// Dark report layout applied to every chart variant: dark canvas, white
    /// text, gridless muted axes, categories ordered by descending total and
    /// dollar-formatted value ticks.
    pub fn dark_report(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            plot_bgcolor: BACKGROUND_COLOR.to_string(),
            paper_bgcolor: BACKGROUND_COLOR.to_string(),
            font: Font {
                color: FONT_COLOR.to_string(),
            },
            autosize: true,
            margin: Margin {
                t: REPORT_MARGIN,
                l: REPORT_MARGIN,
                r: REPORT_MARGIN,
                b: REPORT_MARGIN,
            },
            height: REPORT_HEIGHT,
            xaxis: Axis {
                showgrid: false,
                color: AXIS_COLOR.to_string(),
                categoryorder: Some("total descending".to_string()),
                tickprefix: None,
                tickformat: None,
            },
            yaxis: Axis {
                showgrid: false,
                color: AXIS_COLOR.to_string(),
                categoryorder: None,
                tickprefix: Some("$".to_string()),
                tickformat: Some(",.0f".to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
    pub l: u32,
    pub r: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    pub showgrid: bool,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickprefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
}
