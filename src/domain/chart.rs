/// Chart projection selected on the report page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Scatter,
    Box,
}

impl Default for ChartKind {
    fn default() -> Self {
        Self::Box
    }
}

impl ChartKind {
    /// Resolve a submitted `chart_type` value. Unknown or absent values fall
    /// back to the box plot without signaling an error.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("bar") => ChartKind::Bar,
            Some("scatter") => ChartKind::Scatter,
            Some("box") => ChartKind::Box,
            _ => ChartKind::Box,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
        }
    }
}
