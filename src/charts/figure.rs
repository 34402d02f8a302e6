//! Figure Model
//! Backend-neutral description of a chart, shared by the static and interactive renderers.

/// Series colors as RGB triplets, cycled in series order.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (52, 152, 219),  // Blue
    (231, 76, 60),   // Red
    (46, 204, 113),  // Green
    (155, 89, 182),  // Purple
    (243, 156, 18),  // Orange
    (26, 188, 156),  // Teal
    (233, 30, 99),   // Pink
    (0, 188, 212),   // Cyan
    (121, 85, 72),   // Brown
    (96, 125, 139),  // Blue Grey
];

/// Fraction of one rank slot covered by a group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;

const DAY_MS: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    /// Bars at integer x positions, grouped side by side per series
    GroupedBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxisKind {
    /// Plain numbers (row positions or numeric index values)
    Linear,
    /// Epoch milliseconds
    Datetime,
    /// Integer ranks starting at 1
    Rank,
}

/// One labeled series of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    /// Hover/text label per point, same length as `points`
    pub hover: Vec<String>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            hover: Vec::new(),
        }
    }

    pub fn push(&mut self, point: [f64; 2], hover: impl Into<String>) {
        self.points.push(point);
        self.hover.push(hover.into());
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[1]).collect()
    }

    /// Runs of consecutive points with a finite y. A `NaN` y ends a run.
    pub fn segments(&self) -> impl Iterator<Item = &[[f64; 2]]> + '_ {
        self.points
            .split(|p| !p[1].is_finite())
            .filter(|run| !run.is_empty())
    }

    /// Hover text of the point whose x is closest to `x`.
    pub fn hover_near(&self, x: f64) -> Option<&str> {
        self.points
            .iter()
            .zip(self.hover.iter())
            .min_by(|(a, _), (b, _)| {
                (a[0] - x)
                    .abs()
                    .partial_cmp(&(b[0] - x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(_, h)| h.as_str())
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    pub x_axis: XAxisKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new(kind: ChartKind, x_axis: XAxisKind) -> Self {
        Self {
            kind,
            x_axis,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
        }
    }

    pub fn with_labels(mut self, title: String, x_label: String, y_label: String) -> Self {
        self.title = title;
        self.x_label = x_label;
        self.y_label = y_label;
        self
    }

    /// Add a point to the series named `name`, creating it on first use.
    /// Series keep first-appearance order.
    pub fn push_point(&mut self, name: &str, point: [f64; 2], hover: impl Into<String>) {
        let idx = match self.series.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.series.push(Series::new(name));
                self.series.len() - 1
            }
        };
        self.series[idx].push(point, hover);
    }

    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Largest rank on a rank axis.
    pub fn max_rank(&self) -> usize {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p[0].round().max(0.0) as usize)
            .max()
            .unwrap_or(0)
    }

    /// X range with padding for bars; never empty.
    pub fn x_bounds(&self) -> (f64, f64) {
        if self.kind == ChartKind::GroupedBar {
            return (0.5, self.max_rank().max(1) as f64 + 0.5);
        }
        let (lo, hi) =
            Self::bounds(self.series.iter().flat_map(|s| s.points.iter().map(|p| p[0])));
        if lo == hi {
            (lo - 1.0, hi + 1.0)
        } else {
            (lo, hi)
        }
    }

    /// Y range with 5% headroom; bar charts always start at zero.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (mut lo, mut hi) =
            Self::bounds(self.series.iter().flat_map(|s| s.points.iter().map(|p| p[1])));
        if self.kind == ChartKind::GroupedBar {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if lo == hi {
            return (lo - 1.0, hi + 1.0);
        }
        let pad = (hi - lo) * 0.05;
        let lo = if self.kind == ChartKind::GroupedBar && lo == 0.0 {
            0.0
        } else {
            lo - pad
        };
        (lo, hi + pad)
    }

    fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_infinite() {
            (0.0, 1.0)
        } else {
            (min, max)
        }
    }
}

/// RGB color for the series at `index`.
pub fn series_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}

/// Center offset from the rank position and width of one bar within a group.
pub fn bar_slot(series_index: usize, series_count: usize) -> (f64, f64) {
    let count = series_count.max(1) as f64;
    let width = BAR_GROUP_WIDTH / count;
    let offset = -BAR_GROUP_WIDTH / 2.0 + width * (series_index as f64 + 0.5);
    (offset, width)
}

/// Tick label for an x value; `span` is the visible x range, used to pick date precision.
pub fn format_x_value(axis: XAxisKind, x: f64, span: f64) -> String {
    match axis {
        XAxisKind::Linear => {
            if x.fract() == 0.0 {
                format!("{:.0}", x)
            } else {
                format!("{:.2}", x)
            }
        }
        // Only whole ranks get a label
        XAxisKind::Rank => {
            let rank = x.round();
            if (x - rank).abs() < 1e-6 && rank >= 1.0 {
                format!("{}", rank as i64)
            } else {
                String::new()
            }
        }
        XAxisKind::Datetime => {
            let Some(dt) = chrono::DateTime::from_timestamp_millis(x.round() as i64) else {
                return String::new();
            };
            if span >= 2.0 * DAY_MS {
                dt.format("%Y-%m-%d").to_string()
            } else {
                dt.format("%m-%d %H:%M").to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_group_by_series_name_in_first_appearance_order() {
        let mut fig = Figure::new(ChartKind::Line, XAxisKind::Linear);
        fig.push_point("B", [0.0, 1.0], "");
        fig.push_point("A", [0.0, 2.0], "");
        fig.push_point("B", [1.0, 3.0], "");

        let names: Vec<&str> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(fig.series_named("B").unwrap().ys(), vec![1.0, 3.0]);
        assert_eq!(fig.point_count(), 3);
    }

    #[test]
    fn two_bars_split_the_group_evenly() {
        let (left, width) = bar_slot(0, 2);
        let (right, _) = bar_slot(1, 2);
        assert!((width - 0.4).abs() < 1e-12);
        assert!((left + 0.2).abs() < 1e-12);
        assert!((right - 0.2).abs() < 1e-12);
    }

    #[test]
    fn bar_bounds_start_at_zero_and_cover_ranks() {
        let mut fig = Figure::new(ChartKind::GroupedBar, XAxisKind::Rank);
        fig.push_point("mon", [1.0, 4.0], "a");
        fig.push_point("mon", [2.0, 2.0], "b");
        fig.push_point("tue", [3.0, 1.0], "c");

        assert_eq!(fig.max_rank(), 3);
        assert_eq!(fig.x_bounds(), (0.5, 3.5));
        let (lo, hi) = fig.y_bounds();
        assert_eq!(lo, 0.0);
        assert!(hi > 4.0);
    }

    #[test]
    fn single_point_bounds_are_not_degenerate() {
        let mut fig = Figure::new(ChartKind::Line, XAxisKind::Linear);
        fig.push_point("s", [2.0, 5.0], "");
        assert_eq!(fig.x_bounds(), (1.0, 3.0));
        assert_eq!(fig.y_bounds(), (4.0, 6.0));
    }

    #[test]
    fn rank_ticks_are_whole_numbers_from_one() {
        assert_eq!(format_x_value(XAxisKind::Rank, 1.0, 5.0), "1");
        assert_eq!(format_x_value(XAxisKind::Rank, 4.0, 5.0), "4");
        assert_eq!(format_x_value(XAxisKind::Rank, 1.5, 5.0), "");
        assert_eq!(format_x_value(XAxisKind::Rank, 0.0, 5.0), "");
    }

    #[test]
    fn datetime_ticks_drop_time_for_long_spans() {
        let noon = DAY_MS * 19_000.0 + DAY_MS / 2.0;
        assert_eq!(format_x_value(XAxisKind::Datetime, noon, 10.0 * DAY_MS), "2022-01-08");
        assert_eq!(format_x_value(XAxisKind::Datetime, noon, DAY_MS), "01-08 12:00");
    }

    #[test]
    fn nan_values_split_a_series_into_segments() {
        let mut series = Series::new("s");
        for (x, y) in [(0.0, 1.0), (1.0, 2.0), (2.0, f64::NAN), (3.0, 4.0), (4.0, f64::NAN)] {
            series.push([x, y], "");
        }
        let runs: Vec<&[[f64; 2]]> = series.segments().collect();
        assert_eq!(runs, vec![&[[0.0, 1.0], [1.0, 2.0]][..], &[[3.0, 4.0]][..]]);
    }

    #[test]
    fn hover_picks_nearest_point() {
        let mut series = Series::new("s");
        series.push([0.0, 1.0], "first");
        series.push([10.0, 1.0], "second");
        assert_eq!(series.hover_near(7.0), Some("second"));
        assert_eq!(series.hover_near(2.0), Some("first"));
    }
}
