//! SVG segment plot: leg and foot drawn in the sagittal plane.

use std::fmt::Write;

use kinematics::ProblemInstance;
use shared::domain::{Landmark, Point, Segment};

/// Parameters for the segment plot.
#[derive(Debug, Clone)]
pub struct PlotParams {
    /// Width of the data area in pixels.
    pub plot_width: u32,
    /// Margin around the data area in pixels.
    pub margin: u32,
    /// Vertical stretch: one meter of y is drawn this many times taller than
    /// one meter of x.
    pub aspect: f64,
    /// Grid spacing in meters.
    pub grid_step: f64,
    pub leg_color: String,
    pub foot_color: String,
    pub background_color: String,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            plot_width: 160,
            margin: 60,
            aspect: 4.0,
            grid_step: 0.05,
            leg_color: "#1f4fd1".to_string(),
            foot_color: "#1e9e3a".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

struct Frame {
    min_x: f64,
    max_y: f64,
    scale_x: f64,
    scale_y: f64,
    margin: f64,
}

impl Frame {
    fn to_px(&self, point: Point) -> (f64, f64) {
        (
            (point.x - self.min_x).mul_add(self.scale_x, self.margin),
            (self.max_y - point.y).mul_add(self.scale_y, self.margin),
        )
    }
}

fn snap_down(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

fn snap_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Renders both segments with their four labeled landmarks.
pub fn render_svg(problem: &ProblemInstance, params: &PlotParams) -> String {
    let landmarks = problem.landmarks();
    let points: Vec<Point> = Landmark::ALL.iter().map(|&l| landmarks.get(l)).collect();

    let step = params.grid_step;
    let min_x = snap_down(points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min), step);
    let max_x = snap_up(points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max), step);
    let min_y = snap_down(points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min), step);
    let max_y = snap_up(points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max), step);
    let span_x = (max_x - min_x).max(step);
    let span_y = (max_y - min_y).max(step);

    let margin = f64::from(params.margin);
    let scale_x = f64::from(params.plot_width) / span_x;
    let scale_y = scale_x * params.aspect;
    let plot_height = span_y * scale_y;
    let width = 2.0f64.mul_add(margin, f64::from(params.plot_width));
    let height = 2.0f64.mul_add(margin, plot_height);

    let frame = Frame {
        min_x,
        max_y,
        scale_x,
        scale_y,
        margin,
    };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}" font-family="sans-serif">
  <rect width="100%" height="100%" fill="{}"/>
  <text x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle">Leg and Foot Segments</text>
"#,
        params.background_color,
        width / 2.0,
        margin / 2.0,
    );

    // Grid
    svg.push_str("  <g stroke=\"#dddddd\" stroke-width=\"1\">\n");
    let columns = (span_x / step).round() as usize;
    for i in 0..=columns {
        let x = (i as f64).mul_add(step, min_x);
        let (px, _) = frame.to_px(Point::new(x, max_y));
        let _ = writeln!(
            svg,
            r#"    <line x1="{px:.1}" y1="{margin:.1}" x2="{px:.1}" y2="{:.1}"/>"#,
            margin + plot_height
        );
    }
    let rows = (span_y / step).round() as usize;
    for i in 0..=rows {
        let y = (i as f64).mul_add(step, min_y);
        let (_, py) = frame.to_px(Point::new(min_x, y));
        let _ = writeln!(
            svg,
            r#"    <line x1="{margin:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}"/>"#,
            margin + f64::from(params.plot_width)
        );
    }
    svg.push_str("  </g>\n");

    // Tick labels
    for i in 0..=columns {
        let x = (i as f64).mul_add(step, min_x);
        let (px, _) = frame.to_px(Point::new(x, min_y));
        let _ = writeln!(
            svg,
            r#"  <text x="{px:.1}" y="{:.1}" font-size="9" text-anchor="middle">{x:.2}</text>"#,
            margin + plot_height + 14.0
        );
    }
    for i in 0..=rows {
        let y = (i as f64).mul_add(step, min_y);
        let (_, py) = frame.to_px(Point::new(min_x, y));
        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" font-size="9" text-anchor="end">{y:.2}</text>"#,
            margin - 6.0,
            py + 3.0
        );
    }

    for segment in [Segment::Leg, Segment::Foot] {
        let color = match segment {
            Segment::Leg => &params.leg_color,
            Segment::Foot => &params.foot_color,
        };
        let (start, end) = landmarks.endpoints(segment);
        let (x1, y1) = frame.to_px(start);
        let (x2, y2) = frame.to_px(end);
        let _ = writeln!(
            svg,
            r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{color}" stroke-width="2"/>"#
        );
        for (landmark, (cx, cy), anchor) in [
            (segment.proximal(), (x1, y1), "end"),
            (segment.distal(), (x2, y2), "start"),
        ] {
            let offset = if anchor == "end" { -6.0 } else { 6.0 };
            let _ = writeln!(
                svg,
                r#"  <circle cx="{cx:.1}" cy="{cy:.1}" r="3.5" fill="{color}"/>
  <text x="{:.1}" y="{cy:.1}" font-size="9" text-anchor="{anchor}">{}</text>"#,
                cx + offset,
                landmark.label()
            );
        }
    }

    // Axis labels
    let _ = writeln!(
        svg,
        r#"  <text x="{:.1}" y="{:.1}" font-size="11" text-anchor="middle">X Position (m)</text>"#,
        margin + f64::from(params.plot_width) / 2.0,
        height - 12.0
    );
    let _ = writeln!(
        svg,
        r#"  <text x="14" y="{:.1}" font-size="11" text-anchor="middle" transform="rotate(-90 14 {:.1})">Y Position (m)</text>"#,
        margin + plot_height / 2.0,
        margin + plot_height / 2.0
    );

    // Legend
    let legend_x = margin + 6.0;
    let legend_y = margin + 10.0;
    for (row, (label, color)) in [
        ("Leg (LE → LM)", &params.leg_color),
        ("Foot (C → MT)", &params.foot_color),
    ]
    .into_iter()
    .enumerate()
    {
        let y = (row as f64).mul_add(14.0, legend_y);
        let _ = writeln!(
            svg,
            r#"  <line x1="{legend_x:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"/>
  <text x="{:.1}" y="{:.1}" font-size="9">{label}</text>"#,
            legend_x + 16.0,
            legend_x + 20.0,
            y + 3.0
        );
    }

    svg.push_str("</svg>\n");
    svg
}
