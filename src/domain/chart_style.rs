// Presentation style assigned to a chart
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    Line,
    Bar,
    Scatter,
}

impl ChartStyle {
    pub const DEFAULT: ChartStyle = ChartStyle::Line;

    /// Style for a chart identity. Unmapped identities get [`ChartStyle::DEFAULT`].
    pub fn for_chart(chart_id: u32) -> Self {
        match chart_id {
            1 => ChartStyle::Line,
            2 => ChartStyle::Bar,
            3 => ChartStyle::Scatter,
            _ => Self::DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::Line => "line",
            ChartStyle::Bar => "bar",
            ChartStyle::Scatter => "scatter",
        }
    }
}
