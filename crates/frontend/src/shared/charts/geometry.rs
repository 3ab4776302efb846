//! Layout math for the SVG charts. Pure functions so the components stay thin.

use std::f64::consts::PI;

pub const PALETTE: [&str; 8] = [
    "#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2", "#db2777", "#65a30d",
];

pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub path: String,
    pub share: f64,
}

/// Stroke paths for a donut ring, clockwise from twelve o'clock.
///
/// Non-positive and non-finite values get no segment but keep their index,
/// so colors stay stable when a status has zero projects.
pub fn donut_segments(values: &[f64], center: f64, radius: f64) -> Vec<Option<ArcSegment>> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return values.iter().map(|_| None).collect();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|&value| {
            if !value.is_finite() || value <= 0.0 {
                return None;
            }
            let share = value / total;
            // a full circle cannot be drawn as one arc
            let sweep = (share * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let (x1, y1) = (center + radius * start.cos(), center + radius * start.sin());
            let (x2, y2) = (center + radius * end.cos(), center + radius * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            start = end;
            Some(ArcSegment {
                path: format!(
                    "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2}",
                    x1, y1, radius, radius, large_arc, x2, y2
                ),
                share,
            })
        })
        .collect()
}

/// Largest value on the value axis; never zero.
pub fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Plot area inside the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Plot {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn scale(&self, value: f64, max: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value / max * self.height
        } else {
            0.0
        }
    }

    fn slot(&self, index: usize, count: usize) -> (f64, f64) {
        let slot = self.width / count.max(1) as f64;
        (self.left + slot * index as f64, slot)
    }
}

/// One column per category, series stacked bottom-up in the given order.
pub fn stacked_bars(plot: &Plot, categories: &[Vec<f64>]) -> Vec<Vec<Bar>> {
    let max = axis_max(
        categories
            .iter()
            .map(|values| values.iter().filter(|v| v.is_finite() && **v > 0.0).sum()),
    );
    categories
        .iter()
        .enumerate()
        .map(|(i, values)| {
            let (slot_x, slot) = plot.slot(i, categories.len());
            let width = slot * 0.6;
            let x = slot_x + (slot - width) / 2.0;
            let mut baseline = plot.bottom();
            values
                .iter()
                .map(|&value| {
                    let height = plot.scale(value, max);
                    baseline -= height;
                    Bar {
                        x,
                        y: baseline,
                        width,
                        height,
                    }
                })
                .collect()
        })
        .collect()
}

/// One group per category, series side by side.
pub fn grouped_bars(plot: &Plot, categories: &[Vec<f64>]) -> Vec<Vec<Bar>> {
    let max = axis_max(categories.iter().flatten().copied());
    categories
        .iter()
        .enumerate()
        .map(|(i, values)| {
            let (slot_x, slot) = plot.slot(i, categories.len());
            let inner = slot * 0.8;
            let width = inner / values.len().max(1) as f64;
            let start = slot_x + (slot - inner) / 2.0;
            values
                .iter()
                .enumerate()
                .map(|(j, &value)| {
                    let height = plot.scale(value, max);
                    Bar {
                        x: start + width * j as f64,
                        y: plot.bottom() - height,
                        width,
                        height,
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLOT: Plot = Plot {
        left: 40.0,
        top: 10.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_donut_shares_skip_zero_slices() {
        let segments = donut_segments(&[3.0, 0.0, 1.0], 50.0, 40.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].as_ref().map(|s| s.share), Some(0.75));
        assert!(segments[1].is_none());
        assert_eq!(segments[2].as_ref().map(|s| s.share), Some(0.25));
        // first arc starts at twelve o'clock
        assert!(segments[0].as_ref().unwrap().path.starts_with("M 50.00 10.00"));
    }

    #[test]
    fn test_donut_with_nothing_to_draw() {
        let segments = donut_segments(&[0.0, f64::NAN], 50.0, 40.0);
        assert!(segments.iter().all(Option::is_none));
    }

    #[test]
    fn test_stacked_tallest_column_fills_plot() {
        let bars = stacked_bars(&PLOT, &[vec![2.0, 2.0], vec![1.0, 0.0]]);
        let first = &bars[0];
        assert_eq!(first[0].height, 50.0);
        assert_eq!(first[1].y, PLOT.top);
        assert_eq!(bars[1][0].height, 25.0);
        assert_eq!(bars[1][1].height, 0.0);
    }

    #[test]
    fn test_grouped_bars_share_one_scale() {
        let bars = grouped_bars(&PLOT, &[vec![100.0, 50.0], vec![f64::NAN, 25.0]]);
        assert_eq!(bars[0][0].height, 100.0);
        assert_eq!(bars[0][1].height, 50.0);
        assert_eq!(bars[1][0].height, 0.0);
        assert!(bars[0][1].x > bars[0][0].x);
        assert!(bars[1][0].x > bars[0][1].x);
    }

    #[test]
    fn test_axis_max_never_zero() {
        assert_eq!(axis_max(Vec::new()), 1.0);
        assert_eq!(axis_max(vec![f64::NAN, -3.0]), 1.0);
        assert_eq!(axis_max(vec![4.0, 9.0]), 9.0);
    }
}
