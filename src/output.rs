//! Output rendering for kwhstat charts
//!
//! This module provides renderers for displaying a [`Chart`] in different formats:
//! - Table format for human-readable terminal output
//! - JSON format for feeding a plotting tool or other integrations
//!
//! # Examples
//!
//! ```
//! use kwhstat::charts::{Chart, Series};
//! use kwhstat::output::get_renderer;
//!
//! let mut series = Series::new("23 Nov");
//! series.push("Fri", 52.48);
//! let chart = Chart {
//!     title: "plot_trend_month_kwh_tot_grouped_by_weekday".to_string(),
//!     x_axis_title: "month grouped by weekday".to_string(),
//!     y_axis_title: "Total kWh Used".to_string(),
//!     series: vec![series],
//! };
//!
//! let table = get_renderer(false).render(&chart).unwrap();
//! assert!(table.contains("52.48"));
//!
//! let json = get_renderer(true).render(&chart).unwrap();
//! assert!(json.contains("\"series\""));
//! ```

use crate::charts::Chart;
use crate::error::Result;
use prettytable::{Cell, Row, Table, format};

/// Trait for chart renderers
pub trait ChartRenderer {
    /// Render a chart to a printable string
    fn render(&self, chart: &Chart) -> Result<String>;
}

/// Table renderer for human-readable output
///
/// One row per x category and one column per series. A series with no bar
/// for a category leaves the cell blank.
pub struct TableRenderer;

impl TableRenderer {
    fn format_value(value: f64) -> String {
        format!("{value:.2}")
    }
}

impl ChartRenderer for TableRenderer {
    fn render(&self, chart: &Chart) -> Result<String> {
        let mut output = format!(
            "{}\n\n{} / {}\n",
            chart.title, chart.x_axis_title, chart.y_axis_title
        );

        if chart.is_empty() {
            output.push_str("No data in the selected date range\n");
            return Ok(output);
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("").style_spec("b")];
        titles.extend(
            chart
                .series
                .iter()
                .map(|series| Cell::new(&series.name).style_spec("b")),
        );
        table.set_titles(Row::new(titles));

        for category in chart.categories() {
            let mut cells = vec![Cell::new(category)];
            cells.extend(chart.series.iter().map(|series| {
                let text = series
                    .value(category)
                    .map(Self::format_value)
                    .unwrap_or_default();
                Cell::new(&text).style_spec("r")
            }));
            table.add_row(Row::new(cells));
        }

        output.push_str(&table.to_string());
        Ok(output)
    }
}

/// JSON renderer for machine-readable output
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn render(&self, chart: &Chart) -> Result<String> {
        Ok(serde_json::to_string_pretty(chart)?)
    }
}

/// Get the renderer selected on the command line
pub fn get_renderer(json: bool) -> Box<dyn ChartRenderer> {
    if json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TableRenderer)
    }
}
