//! Chart building for the eight predefined views
//!
//! A [`Chart`] is what the presentation layer receives: labelled bar series
//! plus a title and axis titles. Each [`GraphType`] runs one aggregation pass
//! and shapes the result into series whose `x` and `y` always have the same
//! length. Empty buckets are skipped rather than divided.

use crate::aggregation::{Aggregator, daily_average};
use crate::diagnostics::DiagnosticSink;
use crate::error::{KwhstatError, Result};
use crate::filters::DateRange;
use crate::types::{Metric, RowRecord};
use kwhstat_core::aggregation_types::{Accumulator, DailyUsage, MonthWeekdayUsage, WeekdayHourUsage};
use kwhstat_core::weekday::WEEKDAYS;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One of the eight views selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphType {
    /// 1: total kWh per month, grouped by weekday
    MonthKwhTotalByWeekday,
    /// 2: average daily kWh per month, grouped by weekday
    MonthKwhAvgByWeekday,
    /// 3: average daily kWh per weekday, grouped by month
    WeekdayKwhAvgByMonth,
    /// 4: average kWh per hour slot, grouped by weekday
    HourKwhAvgByWeekday,
    /// 5: average cost per hour slot, grouped by weekday
    HourCostAvgByWeekday,
    /// 6: average calculated rate per hour slot, grouped by weekday
    HourRateAvgByWeekday,
    /// 7: kWh per day
    DailyKwh,
    /// 8: cost per day
    DailyCost,
}

impl GraphType {
    pub const ALL: [GraphType; 8] = [
        Self::MonthKwhTotalByWeekday,
        Self::MonthKwhAvgByWeekday,
        Self::WeekdayKwhAvgByMonth,
        Self::HourKwhAvgByWeekday,
        Self::HourCostAvgByWeekday,
        Self::HourRateAvgByWeekday,
        Self::DailyKwh,
        Self::DailyCost,
    ];

    /// Number used on the command line (1-based)
    pub fn number(self) -> u8 {
        Self::ALL
            .iter()
            .position(|g| *g == self)
            .map(|i| i as u8 + 1)
            .unwrap_or_default()
    }

    /// View name shown as the first line of the chart title
    pub fn name(self) -> &'static str {
        match self {
            Self::MonthKwhTotalByWeekday => "plot_trend_month_kwh_tot_grouped_by_weekday",
            Self::MonthKwhAvgByWeekday => "plot_trend_month_kwh_avg_grouped_by_weekday",
            Self::WeekdayKwhAvgByMonth => "plot_trend_weekday_kwh_avg_grouped_by_month",
            Self::HourKwhAvgByWeekday => "plot_trend_hour_kwh_avg_grouped_by_weekday",
            Self::HourCostAvgByWeekday => "plot_trend_hour_cost_avg_grouped_by_weekday",
            Self::HourRateAvgByWeekday => "plot_trend_calculated_rate_avg_grouped_by_weekday",
            Self::DailyKwh => "plot_kwh_grouped_by_day",
            Self::DailyCost => "plot_cost_grouped_by_day",
        }
    }

    /// One-line description for help output
    pub fn description(self) -> &'static str {
        match self {
            Self::MonthKwhTotalByWeekday => "Trend kWh  Total Month By Weekday",
            Self::MonthKwhAvgByWeekday => "Trend kWh  Average Month By Weekday",
            Self::WeekdayKwhAvgByMonth => "Trend kWh  Average Weekday By Month",
            Self::HourKwhAvgByWeekday => "Trend kWh  Average Hour By Weekday",
            Self::HourCostAvgByWeekday => "Trend Cost Average Hour By Weekday",
            Self::HourRateAvgByWeekday => "Trend Calculated Rate Average Hour By Weekday",
            Self::DailyKwh => "kWh use Daily",
            Self::DailyCost => "Cost Daily",
        }
    }

    /// Field the view aggregates
    pub fn metric(self) -> Metric {
        match self {
            Self::HourCostAvgByWeekday | Self::DailyCost => Metric::Cost,
            Self::HourRateAvgByWeekday => Metric::CalculatedRate,
            _ => Metric::Usage,
        }
    }

    fn axis_titles(self) -> (&'static str, &'static str) {
        match self {
            Self::MonthKwhTotalByWeekday => ("month grouped by weekday", "Total kWh Used"),
            Self::MonthKwhAvgByWeekday => ("month grouped by weekday", "Avg kWh Used"),
            Self::WeekdayKwhAvgByMonth => ("Weekday grouped by month", "Avg kWh Used"),
            Self::HourKwhAvgByWeekday => ("Hour grouped by weekday", "Avg kWh Used"),
            Self::HourCostAvgByWeekday => ("Hour grouped by weekday", "Avg Cost $"),
            Self::HourRateAvgByWeekday => ("Timeslot for day of week", "Rate Avg Dollars per kWh"),
            Self::DailyKwh => ("Day", "kWh Used"),
            Self::DailyCost => ("Day", "Cost"),
        }
    }
}

impl TryFrom<u8> for GraphType {
    type Error = KwhstatError;

    fn try_from(value: u8) -> Result<Self> {
        (value as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                KwhstatError::InvalidArgument(format!("graph type must be 1-8, got {value}"))
            })
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.description())
    }
}

/// A named bar series with aligned categories and values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Append one bar
    pub fn push(&mut self, category: impl Into<String>, value: f64) {
        self.x.push(category.into());
        self.y.push(value);
    }

    /// Value for a category, if the series has one
    pub fn value(&self, category: &str) -> Option<f64> {
        self.x.iter().position(|x| x == category).map(|i| self.y[i])
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Everything the presentation layer needs to draw a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// Every category across all series, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for series in &self.series {
            for x in &series.x {
                if !categories.contains(&x.as_str()) {
                    categories.push(x);
                }
            }
        }
        categories
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }
}

/// Chart title: view name, the range's display labels and the source file
pub fn chart_title(graph: GraphType, range: &DateRange, filename: &str) -> String {
    format!(
        "{}\n{}    {}\nFilename: {}",
        graph.name(),
        range.start_label(),
        range.end_label(),
        filename
    )
}

/// Run the aggregation behind `graph` and shape it into a chart
pub fn build_chart(
    graph: GraphType,
    records: &[RowRecord],
    range: &DateRange,
    filename: &str,
    sink: &mut dyn DiagnosticSink,
) -> Chart {
    debug!("Building view {}", graph);
    let aggregator = Aggregator::new(range.clone()).with_metric(graph.metric());

    let series = match graph {
        GraphType::MonthKwhTotalByWeekday => {
            let usage = aggregator.by_month_weekday(records, sink);
            months_by_weekday(&usage, |bucket| Some(bucket.sum))
        }
        GraphType::MonthKwhAvgByWeekday => {
            let usage = aggregator.by_month_weekday(records, sink);
            months_by_weekday(&usage, daily_average)
        }
        GraphType::WeekdayKwhAvgByMonth => {
            let usage = aggregator.by_month_weekday(records, sink);
            weekdays_by_month(&usage)
        }
        GraphType::HourKwhAvgByWeekday
        | GraphType::HourCostAvgByWeekday
        | GraphType::HourRateAvgByWeekday => {
            let usage = aggregator.by_weekday_hour(records, sink);
            hours_by_weekday(&usage)
        }
        GraphType::DailyKwh | GraphType::DailyCost => {
            let usage = aggregator.by_day(records);
            vec![per_day(&usage, graph.metric())]
        }
    };

    let (x_axis_title, y_axis_title) = graph.axis_titles();
    Chart {
        title: chart_title(graph, range, filename),
        x_axis_title: x_axis_title.to_string(),
        y_axis_title: y_axis_title.to_string(),
        series,
    }
}

fn months_by_weekday(
    usage: &MonthWeekdayUsage,
    value: impl Fn(&Accumulator) -> Option<f64>,
) -> Vec<Series> {
    usage
        .months
        .iter()
        .map(|(month, weekdays)| {
            let mut series = Series::new(month.as_str());
            for weekday in usage.weekdays(month) {
                if let Some(y) = weekdays.get(weekday).and_then(&value) {
                    series.push(weekday, y);
                }
            }
            series
        })
        .collect()
}

fn weekdays_by_month(usage: &MonthWeekdayUsage) -> Vec<Series> {
    WEEKDAYS
        .iter()
        .map(|weekday| {
            let mut series = Series::new(*weekday);
            for month in usage.month_labels() {
                if let Some(y) = usage.get(month, weekday).and_then(daily_average) {
                    series.push(month, y);
                }
            }
            series
        })
        .filter(|series| !series.is_empty())
        .collect()
}

fn hours_by_weekday(usage: &WeekdayHourUsage) -> Vec<Series> {
    let weekdays = usage.present_weekdays();
    usage
        .hours
        .iter()
        .map(|hour| {
            let mut series = Series::new(hour.as_str());
            for weekday in &weekdays {
                if let Some(y) = usage.get(weekday, hour).and_then(Accumulator::mean) {
                    series.push(*weekday, y);
                }
            }
            series
        })
        .collect()
}

fn per_day(usage: &DailyUsage, metric: Metric) -> Series {
    let mut series = Series::new(metric.to_string());
    for day in usage.days.values() {
        series.push(day.date_label.as_str(), day.total);
    }
    series
}
