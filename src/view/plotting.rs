use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::ChartError;

use super::chart::{ChartConfig, ChartKind, ChartSurface, Charting, Rgba};

/// [`Charting`] implementation that renders inline SVG with `plotters`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersCharting;

impl Charting for PlottersCharting {
    fn draw(&self, surface: &mut ChartSurface, config: &ChartConfig) -> Result<(), ChartError> {
        if config.labels.len() != config.data.len() {
            return Err(ChartError::Misaligned {
                id: surface.id.clone(),
                labels: config.labels.len(),
                values: config.data.len(),
            });
        }

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (surface.width, surface.height)).into_drawing_area();
            let drawn = match config.kind {
                ChartKind::Bar => plot_bar_chart(&root, config),
            };
            drawn.map_err(|err| ChartError::Draw {
                id: surface.id.clone(),
                message: err.to_string(),
            })?;
        }
        surface.content = svg;
        Ok(())
    }
}

fn plot_bar_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    config: &ChartConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let bars = u32::try_from(config.data.len()).unwrap_or(u32::MAX).max(1);
    let (y_min, y_max) = value_range(&config.data, config.begin_at_zero);
    let labels = &config.labels;

    // Integer segments are inclusive, so `0..bars` leaves one empty trailing slot.
    let mut chart = ChartBuilder::on(root)
        .caption(&config.dataset_label, ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..bars).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().saturating_add(1))
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => usize::try_from(*idx)
                .ok()
                .and_then(|idx| labels.get(idx))
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_desc(config.axis_titles.x)
        .y_desc(config.axis_titles.y)
        .draw()?;

    let fill = to_color(config.styling.fill);
    let border = to_color(config.styling.border);
    let stroke = config.styling.border_width;

    chart.draw_series(config.data.iter().enumerate().map(|(idx, value)| {
        let mut bar = Rectangle::new(bar_corners(idx, *value), fill.filled());
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;
    chart.draw_series(config.data.iter().enumerate().map(|(idx, value)| {
        let mut bar = Rectangle::new(bar_corners(idx, *value), border.stroke_width(stroke));
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn bar_corners(idx: usize, value: f64) -> [(SegmentValue<u32>, f64); 2] {
    let left = u32::try_from(idx).unwrap_or(u32::MAX);
    [
        (SegmentValue::Exact(left), 0.0),
        (
            SegmentValue::Exact(left.saturating_add(1)),
            value.clamp(-AXIS_LIMIT, AXIS_LIMIT),
        ),
    ]
}

/// Largest magnitude placed on the y axis. Keeps `max - min` finite, which the
/// mesh layout relies on to terminate.
const AXIS_LIMIT: f64 = 1e300;

// Zero stays inside the range when the axis begins at zero; a flat series
// still gets a non-empty range.
fn value_range(data: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let finite = data
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(-AXIS_LIMIT, AXIS_LIMIT));
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    let (min, max) = if min > max {
        (0.0, 0.0)
    } else if begin_at_zero {
        (min.min(0.0), max.max(0.0))
    } else {
        (min, max)
    };
    if max > min {
        (min, max)
    } else {
        (min.min(0.0), min.abs().max(1.0))
    }
}

const fn to_color(rgba: Rgba) -> RGBAColor {
    RGBAColor(rgba.r, rgba.g, rgba.b, rgba.a)
}
