//! Drawing of an involute curve together with its reference circle.
//!
//! The `Renderer` trait is the seam between the form and whatever shows the
//! plot. `SvgRenderer` draws with `plotters` into an in-memory SVG document.
use core::f64::consts::TAU;
use core::ops::Range;

use plotters::prelude::*;
use tracing::debug;

use super::*;

/// Something that can show a curve. Every call replaces the previous drawing.
pub trait Renderer {
    fn render(&mut self, curve: &InvoluteCurve) -> Result<(), RenderError>;
}

/// Look of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Edge length of the square canvas in pixels.
    pub size: u32,
    /// Margin around the plotting area in pixels.
    pub margin: u32,
    /// Number of line segments used to draw the reference circle.
    pub circle_segments: usize,
    /// Radius of the point markers in pixels.
    pub marker_size: u32,
    pub line_width: u32,
    /// Extra room around the geometry as a fraction of its extent.
    pub padding: NativeFloat,
    /// Grid lines on each side of an axis, 0 disables the grid.
    pub grid_divisions: usize,
    pub background: RGBColor,
    pub grid_color: RGBColor,
    pub circle_color: RGBColor,
    pub axis_color: RGBColor,
    pub curve_color: RGBColor,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            size: 800,
            margin: 10,
            circle_segments: 256,
            marker_size: 3,
            line_width: 1,
            padding: 0.1,
            grid_divisions: 5,
            background: WHITE,
            grid_color: RGBColor(220, 220, 220),
            circle_color: RED,
            axis_color: BLACK,
            curve_color: BLUE,
        }
    }
}

impl PlotStyle {
    /// Square data window centred on the origin that holds the circle and all points.
    /// Using the same range on both axes on a square canvas keeps the aspect ratio at 1.
    fn window(&self, curve: &InvoluteCurve) -> Range<NativeFloat> {
        let extent = curve
            .iter()
            .map(|p| p.x().abs().max(p.y().abs()))
            .fold(curve.radius().abs(), NativeFloat::max);
        let half = if extent > 0.0 { extent * (1.0 + self.padding) } else { 1.0 };
        -half..half
    }

    /// Evenly spaced horizontal and vertical lines across `window`, leaving out the axes.
    fn grid(&self, window: &Range<NativeFloat>) -> Vec<[(NativeFloat, NativeFloat); 2]> {
        let (lo, hi) = (window.start, window.end);
        let mut lines = Vec::with_capacity(4 * self.grid_divisions);
        for k in 1..=self.grid_divisions {
            let offset = hi * k as NativeFloat / self.grid_divisions as NativeFloat;
            for c in [-offset, offset] {
                lines.push([(c, lo), (c, hi)]);
                lines.push([(lo, c), (hi, c)]);
            }
        }
        lines
    }

    /// Closed polyline approximating the reference circle of `radius`.
    fn circle(&self, radius: NativeFloat) -> Vec<(NativeFloat, NativeFloat)> {
        let r = radius.abs();
        let segments = self.circle_segments.max(3);
        (0..=segments)
            .map(|i| {
                let phi = TAU * i as NativeFloat / segments as NativeFloat;
                (r * phi.cos(), r * phi.sin())
            })
            .collect()
    }
}

/// Draws into an SVG document held in memory.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    style: PlotStyle,
    svg: String,
}

impl SvgRenderer {
    pub fn new(style: PlotStyle) -> Self {
        SvgRenderer {
            style,
            svg: String::new(),
        }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// The last drawing, empty before the first successful render.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    fn draw(&self, curve: &InvoluteCurve) -> Result<String, RenderError> {
        let style = &self.style;
        let window = style.window(curve);
        let points: Vec<(NativeFloat, NativeFloat)> = curve.iter().map(|p| p.to_tuple()).collect();

        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, (style.size, style.size)).into_drawing_area();
            root.fill(&style.background).map_err(RenderError::backend)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(style.margin)
                .build_cartesian_2d(window.clone(), window.clone())
                .map_err(RenderError::backend)?;

            for line in style.grid(&window) {
                chart
                    .draw_series(LineSeries::new(line, style.grid_color.stroke_width(style.line_width)))
                    .map_err(RenderError::backend)?;
            }

            // axes through the origin
            chart
                .draw_series(LineSeries::new(
                    vec![(window.start, 0.0), (window.end, 0.0)],
                    style.axis_color.stroke_width(style.line_width),
                ))
                .map_err(RenderError::backend)?;
            chart
                .draw_series(LineSeries::new(
                    vec![(0.0, window.start), (0.0, window.end)],
                    style.axis_color.stroke_width(style.line_width),
                ))
                .map_err(RenderError::backend)?;

            // reference circle, outline only
            chart
                .draw_series(LineSeries::new(
                    style.circle(curve.radius()),
                    style.circle_color.stroke_width(style.line_width),
                ))
                .map_err(RenderError::backend)?;

            // the involute in sampling order with a marker on every point
            chart
                .draw_series(LineSeries::new(
                    points.clone(),
                    style.curve_color.stroke_width(style.line_width),
                ))
                .map_err(RenderError::backend)?;
            chart
                .draw_series(PointSeries::of_element(
                    points,
                    style.marker_size,
                    style.curve_color.filled(),
                    &|coord, size, shape| EmptyElement::at(coord) + Circle::new((0, 0), size, shape),
                ))
                .map_err(RenderError::backend)?;

            root.present().map_err(RenderError::backend)?;
        }
        Ok(buf)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, curve: &InvoluteCurve) -> Result<(), RenderError> {
        if !curve.radius().is_finite() || !curve.iter().all(|p| p.is_finite()) {
            return Err(RenderError::NonFinite);
        }
        // the previous drawing is only dropped once the new one is complete
        self.svg = self.draw(curve)?;
        debug!(points = curve.len(), bytes = self.svg.len(), "plot rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(radius: NativeFloat, coefficient: NativeFloat, points: usize) -> InvoluteCurve {
        generate_involute_curve(&CurveParameters::new(radius, coefficient, points)).unwrap()
    }

    #[test]
    fn renders_svg_document() {
        let mut renderer = SvgRenderer::default();
        assert!(renderer.svg().is_empty());
        renderer.render(&curve(1.0, 1.0, 10)).unwrap();
        assert!(renderer.svg().contains("<svg"));
        assert!(renderer.svg().contains("</svg>"));
    }

    #[test]
    fn one_marker_per_point() {
        let mut renderer = SvgRenderer::new(PlotStyle::default());
        renderer.render(&curve(1.0, 0.5, 17)).unwrap();
        assert_eq!(renderer.svg().matches("<circle").count(), 17);
    }

    #[test]
    fn empty_curve_draws_circle_only() {
        let mut renderer = SvgRenderer::default();
        renderer.render(&curve(2.0, 1.0, 0)).unwrap();
        assert!(renderer.svg().contains("<svg"));
        assert_eq!(renderer.svg().matches("<circle").count(), 0);
    }

    #[test]
    fn render_replaces_previous_drawing() {
        let mut renderer = SvgRenderer::default();
        renderer.render(&curve(1.0, 1.0, 30)).unwrap();
        renderer.render(&curve(1.0, 1.0, 4)).unwrap();
        assert_eq!(renderer.svg().matches("<circle").count(), 4);
        assert_eq!(renderer.svg().matches("<svg").count(), 1);
    }

    #[test]
    fn non_finite_keeps_previous_drawing() {
        let mut renderer = SvgRenderer::default();
        renderer.render(&curve(1.0, 1.0, 5)).unwrap();
        let before = renderer.svg().to_owned();
        let bad = curve(NativeFloat::NAN, 1.0, 5);
        assert!(matches!(renderer.render(&bad), Err(RenderError::NonFinite)));
        assert_eq!(renderer.svg(), before);
    }

    #[test]
    fn window_is_square_and_holds_everything() {
        let style = PlotStyle::default();
        let c = curve(1.0, 1.0, 20);
        let window = style.window(&c);
        assert_eq!(window.start, -window.end);
        for p in &c {
            assert!(window.contains(&p.x()) && window.contains(&p.y()));
        }
        assert!(window.end > 1.0);
    }

    #[test]
    fn window_for_degenerate_geometry() {
        let style = PlotStyle::default();
        let window = style.window(&curve(0.0, 0.0, 0));
        assert_eq!(window, -1.0..1.0);
    }

    #[test]
    fn grid_lines_are_drawn() {
        let c = curve(1.0, 1.0, 8);
        let mut plain = SvgRenderer::new(PlotStyle { grid_divisions: 0, ..PlotStyle::default() });
        let mut gridded = SvgRenderer::new(PlotStyle { grid_divisions: 3, ..PlotStyle::default() });
        plain.render(&c).unwrap();
        gridded.render(&c).unwrap();
        let polylines = |svg: &str| svg.matches("<polyline").count();
        assert_eq!(polylines(gridded.svg()), polylines(plain.svg()) + 12);
    }

    #[test]
    fn grid_spans_the_window_without_the_axes() {
        let style = PlotStyle { grid_divisions: 4, ..PlotStyle::default() };
        let lines = style.grid(&(-2.0..2.0));
        assert_eq!(lines.len(), 16);
        for [(x0, y0), (x1, y1)] in lines {
            if x0 == x1 {
                assert!(x0 != 0.0 && x0.abs() <= 2.0);
                assert_eq!((y0, y1), (-2.0, 2.0));
            } else {
                assert_eq!(y0, y1);
                assert!(y0 != 0.0 && y0.abs() <= 2.0);
                assert_eq!((x0, x1), (-2.0, 2.0));
            }
        }
    }

    #[test]
    fn circle_is_closed() {
        let style = PlotStyle::default();
        let circle = style.circle(-2.0);
        assert_eq!(circle.len(), style.circle_segments + 1);
        let (first, last) = (circle[0], circle[circle.len() - 1]);
        assert!((first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9);
        for (x, y) in circle {
            assert!(((x * x + y * y).sqrt() - 2.0).abs() < 1e-9);
        }
    }
}
