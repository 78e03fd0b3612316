use serde::Serialize;
use std::fmt;

/// A year that has a donut chart on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Year(u16);

impl Year {
    pub const FIRST: Year = Year(2022);
    pub const LAST: Year = Year(2024);

    pub fn new(value: u16) -> Option<Year> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&value)
            .then_some(Year(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// Steps back one year, wrapping from the first year to the last.
    pub fn previous(self) -> Year {
        if self == Self::FIRST {
            Self::LAST
        } else {
            Year(self.0 - 1)
        }
    }

    /// Steps forward one year, wrapping from the last year to the first.
    pub fn next(self) -> Year {
        if self == Self::LAST {
            Self::FIRST
        } else {
            Year(self.0 + 1)
        }
    }

    /// Position of this year's donut chart.
    pub fn chart_index(self) -> usize {
        usize::from(self.0 - Self::FIRST.0)
    }

    pub fn all() -> impl Iterator<Item = Year> {
        (Self::FIRST.0..=Self::LAST.0).map(Year)
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One year's donut chart slot and whether it is the one on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DonutChart {
    pub year: Year,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn button_id(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Quarter swatch colors, one per three months.
pub const QUARTER_COLORS: [&str; 4] = ["#EBEB55", "#D4D700", "#55A630", "#007F5F"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Zero-based position in the calendar.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based quarter, 0 for JAN..MAR through 3 for OCT..DEC.
    pub fn quarter(self) -> usize {
        self.index() / 3
    }

    pub fn color(self) -> &'static str {
        QUARTER_COLORS[self.quarter()]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the month summary card shows.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthSummary {
    pub month: String,
    pub total_accidents: u64,
    pub percentage: String,
}

impl Default for MonthSummary {
    fn default() -> Self {
        Self {
            month: "n/a".to_string(),
            total_accidents: 0,
            percentage: "0%".to_string(),
        }
    }
}

/// What the search result panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub barangay: String,
    pub hour_label: String,
    pub percentage: String,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            barangay: "n/a".to_string(),
            hour_label: hour_label("n/a"),
            percentage: "n/a".to_string(),
        }
    }
}

pub fn hour_label(hour: &str) -> String {
    format!("HOUR: {}", hour)
}

/// Live values of the barangay selector and hour input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchDraft {
    pub barangay: String,
    pub hour: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    BarGraph,
    HeatMap,
    SearchResult,
}

impl Default for Panel {
    fn default() -> Self {
        ToggleLabel::default().visible_panel()
    }
}

/// Text of the view toggle button. The label names the view the button
/// switches *to*, so `ViewHeatMap` is shown while the bar graph is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleLabel {
    #[default]
    ViewHeatMap,
    ViewBarGraph,
}

impl ToggleLabel {
    pub fn text(self) -> &'static str {
        match self {
            ToggleLabel::ViewHeatMap => "VIEW HEAT MAP",
            ToggleLabel::ViewBarGraph => "VIEW BAR GRAPH",
        }
    }

    pub fn flipped(self) -> ToggleLabel {
        match self {
            ToggleLabel::ViewHeatMap => ToggleLabel::ViewBarGraph,
            ToggleLabel::ViewBarGraph => ToggleLabel::ViewHeatMap,
        }
    }

    /// The graph panel that is visible while this label is shown.
    pub fn visible_panel(self) -> Panel {
        match self {
            ToggleLabel::ViewHeatMap => Panel::BarGraph,
            ToggleLabel::ViewBarGraph => Panel::HeatMap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_rejects_values_outside_chart_range() {
        assert_eq!(Year::new(2021), None);
        assert_eq!(Year::new(2025), None);
        assert_eq!(Year::new(2023).map(Year::value), Some(2023));
    }

    #[test]
    fn year_wraps_at_both_ends() {
        assert_eq!(Year::FIRST.previous(), Year::LAST);
        assert_eq!(Year::LAST.next(), Year::FIRST);
        assert_eq!(Year::FIRST.next().value(), 2023);
        assert_eq!(Year::LAST.previous().value(), 2023);
    }

    #[test]
    fn chart_index_is_offset_from_first_year() {
        let indexes: Vec<usize> = Year::all().map(Year::chart_index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn months_are_ordered_jan_to_dec() {
        let labels: Vec<&str> = Month::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec!["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"]
        );
    }

    #[test]
    fn month_colors_follow_quarters() {
        for (index, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.color(), QUARTER_COLORS[index / 3], "{}", month);
        }
        assert_eq!(Month::Mar.color(), "#EBEB55");
        assert_eq!(Month::Apr.color(), "#D4D700");
        assert_eq!(Month::Sep.color(), "#55A630");
        assert_eq!(Month::Oct.color(), "#007F5F");
    }

    #[test]
    fn month_serializes_as_uppercase_label() {
        assert_eq!(serde_json::to_string(&Month::Mar).unwrap(), "\"MAR\"");
    }

    #[test]
    fn toggle_label_flips_between_views() {
        let label = ToggleLabel::default();
        assert_eq!(label.text(), "VIEW HEAT MAP");
        assert_eq!(label.visible_panel(), Panel::BarGraph);
        assert_eq!(label.flipped().text(), "VIEW BAR GRAPH");
        assert_eq!(label.flipped().visible_panel(), Panel::HeatMap);
        assert_eq!(label.flipped().flipped(), label);
    }
}
