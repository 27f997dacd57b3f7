//! SVG geometry for the fraud charts. Everything here is plain arithmetic so
//! the rendering components only have to place the results.

use std::f64::consts::PI;

use crate::charts::{max_count, Bucket};

pub const PALETTE: [&str; 6] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28FD0", "#FF6384"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 300.0,
            left: 40.0,
            right: 16.0,
            top: 16.0,
            bottom: 32.0,
        }
    }
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// Centre of slot `i` out of `n` along the x axis.
    pub fn slot_x(&self, i: usize, n: usize) -> f64 {
        let slot = self.plot_width() / n.max(1) as f64;
        self.left + slot * (i as f64 + 0.5)
    }

    pub fn value_y(&self, value: u32, scale: u32) -> f64 {
        self.baseline() - self.plot_height() * f64::from(value) / f64::from(scale.max(1))
    }
}

/// Top of the y axis and the tick step. The top is a whole number of steps
/// at or above the largest count, and never zero.
pub fn axis(buckets: &[Bucket]) -> (u32, u32) {
    let max = max_count(buckets).max(1);
    let step = max.div_ceil(4);
    (step * max.div_ceil(step), step)
}

pub fn y_scale(buckets: &[Bucket]) -> u32 {
    axis(buckets).0
}

pub fn y_ticks(buckets: &[Bucket]) -> Vec<u32> {
    let (top, step) = axis(buckets);
    (0..=top).step_by(step as usize).collect()
}

pub fn points(buckets: &[Bucket], frame: &Frame) -> Vec<(f64, f64)> {
    let scale = y_scale(buckets);
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (frame.slot_x(i, buckets.len()), frame.value_y(b.count, scale)))
        .collect()
}

pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the region between the line and the baseline.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut d = format!("M{:.1},{:.1}", first.0, baseline);
    for (x, y) in points {
        d.push_str(&format!(" L{:.1},{:.1}", x, y));
    }
    d.push_str(&format!(" L{:.1},{:.1} Z", last.0, baseline));
    d
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bars(buckets: &[Bucket], frame: &Frame) -> Vec<Bar> {
    let scale = y_scale(buckets);
    let slot = frame.plot_width() / buckets.len().max(1) as f64;
    let width = slot * 0.7;
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let y = frame.value_y(b.count, scale);
            Bar {
                x: frame.slot_x(i, buckets.len()) - width / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Slice {
    /// The only non-empty category; an arc cannot express a full turn.
    Whole { color: &'static str },
    Arc { path: String, color: &'static str },
}

/// Pie slices in bucket order, starting at twelve o'clock and going clockwise.
pub fn pie_slices(buckets: &[Bucket], cx: f64, cy: f64, r: f64) -> Vec<Slice> {
    let total: u32 = buckets.iter().map(|b| b.count).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut slices = Vec::new();
    let mut start = -PI / 2.0;
    for (i, bucket) in buckets.iter().enumerate() {
        if bucket.count == 0 {
            continue;
        }
        let color = palette_color(i);
        if bucket.count == total {
            return vec![Slice::Whole { color }];
        }
        let sweep = 2.0 * PI * f64::from(bucket.count) / f64::from(total);
        let end = start + sweep;
        let (x0, y0) = (cx + r * start.cos(), cy + r * start.sin());
        let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
        let large = if sweep > PI { 1 } else { 0 };
        slices.push(Slice::Arc {
            path: format!(
                "M{:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} Z",
                cx, cy, x0, y0, r, r, large, x1, y1
            ),
            color,
        });
        start = end;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(counts: &[u32]) -> Vec<Bucket> {
        counts
            .iter()
            .enumerate()
            .map(|(i, c)| Bucket {
                label: i.to_string(),
                count: *c,
            })
            .collect()
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(6), "#0088FE");
        assert_eq!(palette_color(7), "#00C49F");
    }

    #[test]
    fn zero_series_sits_on_baseline() {
        let frame = Frame::default();
        let pts = points(&buckets(&[0, 0, 0]), &frame);
        assert!(pts.iter().all(|(_, y)| (*y - frame.baseline()).abs() < 1e-9));
    }

    #[test]
    fn peak_reaches_top_of_plot() {
        let frame = Frame::default();
        let pts = points(&buckets(&[1, 4, 2]), &frame);
        assert!((pts[1].1 - frame.top).abs() < 1e-9);
        assert!(pts[0].0 < pts[1].0 && pts[1].0 < pts[2].0);
    }

    #[test]
    fn bars_stand_on_baseline() {
        let frame = Frame::default();
        for bar in bars(&buckets(&[3, 0, 6]), &frame) {
            assert!((bar.y + bar.height - frame.baseline()).abs() < 1e-9);
            assert!(bar.width > 0.0);
        }
    }

    #[test]
    fn ticks_cover_largest_count() {
        assert_eq!(y_ticks(&buckets(&[0, 0])), vec![0, 1]);
        assert_eq!(y_ticks(&buckets(&[4, 2])), vec![0, 1, 2, 3, 4]);
        assert_eq!(y_ticks(&buckets(&[10])), vec![0, 3, 6, 9, 12]);
        assert_eq!(y_scale(&buckets(&[10])), 12);
        assert_eq!(y_scale(&buckets(&[9])), 9);
    }

    #[test]
    fn area_is_closed() {
        let d = area_path(&[(10.0, 5.0), (20.0, 7.0)], 50.0);
        assert!(d.starts_with("M10.0,50.0"));
        assert!(d.ends_with("L20.0,50.0 Z"));
        assert_eq!(area_path(&[], 50.0), "");
    }

    #[test]
    fn pie_edge_cases() {
        assert!(pie_slices(&buckets(&[]), 0.0, 0.0, 10.0).is_empty());
        assert!(pie_slices(&buckets(&[0, 0]), 0.0, 0.0, 10.0).is_empty());
        assert_eq!(
            pie_slices(&buckets(&[0, 5]), 0.0, 0.0, 10.0),
            vec![Slice::Whole { color: "#00C49F" }]
        );
    }

    #[test]
    fn pie_uses_large_arc_for_majority() {
        let slices = pie_slices(&buckets(&[3, 1]), 100.0, 100.0, 50.0);
        assert_eq!(slices.len(), 2);
        match &slices[0] {
            Slice::Arc { path, color } => {
                assert!(path.contains(" 0 1 1 "));
                assert_eq!(*color, "#0088FE");
            }
            other => panic!("unexpected {other:?}"),
        }
        match &slices[1] {
            Slice::Arc { path, .. } => assert!(path.contains(" 0 0 1 ")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
