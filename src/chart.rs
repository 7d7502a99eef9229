use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::core::ballistics::TrajectorySample;
use crate::core::window::AxisWindow;
use crate::error::ChartError;

pub const CHART_SIZE: (u32, u32) = (800, 400);

const MARGIN_PX: u32 = 10;
const X_LABEL_AREA_PX: u32 = 30;
const Y_LABEL_AREA_PX: u32 = 40;

/// Renders the above-ground part of a sampled trajectory as an SVG document.
///
/// Axes start at the launch point and are framed by
/// [`AxisWindow::fit`], so the plot keeps a fixed x:y ratio.
pub fn render_trajectory_svg(samples: &[TrajectorySample]) -> Result<String, ChartError> {
    if samples.is_empty() {
        return Err(ChartError::EmptyTrajectory);
    }

    let window = AxisWindow::fit(samples);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(MARGIN_PX)
            .x_label_area_size(X_LABEL_AREA_PX)
            .y_label_area_size(Y_LABEL_AREA_PX)
            .build_cartesian_2d(0.0..window.x_span, 0.0..window.y_span)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc("distance (m)")
            .y_desc("height (m)")
            .draw()
            .map_err(draw_error)?;

        let points = samples
            .iter()
            .filter(|sample| sample.y >= 0.0)
            .map(|sample| (sample.x, sample.y));
        chart
            .draw_series(LineSeries::new(points, &BLUE))
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }

    Ok(svg)
}

fn draw_error(err: DrawingAreaErrorKind<std::io::Error>) -> ChartError {
    ChartError::Draw(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::Projectile;

    #[test]
    fn renders_svg_document() {
        let samples: Vec<_> = Projectile::new(25.0, 45.0).launch().collect();
        let svg = render_trajectory_svg(&samples).expect("render chart");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("polyline"));
    }

    #[test]
    fn rejects_empty_trajectory() {
        assert!(matches!(
            render_trajectory_svg(&[]),
            Err(ChartError::EmptyTrajectory)
        ));
    }
}
