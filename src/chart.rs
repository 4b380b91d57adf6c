//! Scatter plot of the observations with the fitted line.

use std::ops::Range;

use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;

use crate::dataset::Dataset;
use crate::prelude::*;
use crate::regression::FittedModel;

const SIZE: (u32, u32) = (640, 512);
const MARGIN_RATIO: f64 = 0.05;

/// Texts drawn on the chart.
pub struct ChartLabels {
    pub x_axis: String,
    pub y_axis: String,
    pub observations: String,
    pub regression: String,
}

/// Renders the chart into an SVG document.
#[instrument(skip_all)]
pub fn render_svg(dataset: &Dataset, model: &FittedModel, labels: &ChartLabels) -> Result<String> {
    anyhow::ensure!(!dataset.is_empty(), "there is nothing to plot");
    let observations = dataset.observations();
    let (min_fee, max_fee) = min_max(observations.iter().map(|point| point.annual_fee))
        .ok_or_else(|| anyhow!("there is nothing to plot"))?;
    let line = [(min_fee, model.predict(min_fee)), (max_fee, model.predict(max_fee))];
    let (min_cost, max_cost) = min_max(
        observations
            .iter()
            .map(|point| point.initial_cost)
            .chain(line.iter().map(|(_, cost)| *cost)),
    )
    .ok_or_else(|| anyhow!("there is nothing to plot"))?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(pad(min_fee, max_fee), pad(min_cost, max_cost))?;
        chart
            .configure_mesh()
            .x_desc(labels.x_axis.as_str())
            .y_desc(labels.y_axis.as_str())
            .draw()?;

        chart
            .draw_series(
                observations
                    .iter()
                    .map(|point| Circle::new((point.annual_fee, point.initial_cost), 4, BLUE.filled())),
            )?
            .label(labels.observations.as_str())
            .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));
        chart
            .draw_series(LineSeries::new(line, RED.stroke_width(2)))?
            .label(labels.regression.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }

    debug!(n_bytes = svg.len(), "rendered");
    Ok(svg)
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some((value, value)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Extends the range so that the markers on its edges are fully visible.
fn pad(min: f64, max: f64) -> Range<f64> {
    let margin = match (max - min) * MARGIN_RATIO {
        margin if margin > 0.0 => margin,
        _ => min.abs().max(1.0) * MARGIN_RATIO,
    };
    (min - margin)..(max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Observation;

    fn labels() -> ChartLabels {
        ChartLabels {
            x_axis: "Annual fee".to_string(),
            y_axis: "Initial cost".to_string(),
            observations: "Observations".to_string(),
            regression: "Regression line".to_string(),
        }
    }

    #[test]
    fn render_svg_ok() -> Result {
        let dataset = Dataset::from(vec![
            Observation::new(1000.0, 300.0),
            Observation::new(2000.0, 650.0),
            Observation::new(3000.0, 900.0),
        ]);
        let model = FittedModel::fit(dataset.observations())?;
        let svg = render_svg(&dataset, &model, &labels())?;
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<circle").count(), 4, "3 markers and 1 legend marker");
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("Regression line"));
        Ok(())
    }

    #[test]
    fn empty_dataset_error() {
        let dataset = Dataset::from(Vec::new());
        let model = FittedModel {
            slope: 1.0,
            intercept: 0.0,
        };
        assert!(render_svg(&dataset, &model, &labels()).is_err());
    }

    #[test]
    fn pad_ok() {
        assert_eq!(pad(100.0, 200.0), 95.0..205.0);
        assert_eq!(pad(0.0, 0.0), -0.05..0.05);
    }
}
