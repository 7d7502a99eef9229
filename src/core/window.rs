use crate::core::ballistics::TrajectorySample;

/// x:y ratio of the data window.
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Axis spans, in metres, of a chart framing a trajectory from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_span: f64,
    pub y_span: f64,
}

impl AxisWindow {
    /// Pads the raw extents and widens one axis so the window keeps
    /// [`DISTANCE_TO_HEIGHT_RATIO`].
    pub fn fixed_ratio(raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_x_span = raw_max_x.max(MIN_SPAN);
        let raw_y_span = raw_max_y.max(MIN_SPAN);

        let mut x_span = (raw_max_x + raw_x_span * X_PADDING_RATIO).max(MIN_SPAN);
        let mut y_span = (raw_max_y + raw_y_span * Y_PADDING_RATIO).max(MIN_SPAN);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self { x_span, y_span }
    }

    pub fn fit(samples: &[TrajectorySample]) -> Self {
        let (max_x, max_y) = samples
            .iter()
            .fold((0.0f64, 0.0f64), |(mx, my), s| (mx.max(s.x), my.max(s.y)));
        Self::fixed_ratio(max_x, max_y)
    }
}
