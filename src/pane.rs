//! Per-frame redraw plan: panes holding layered elements plus overlay slots.
//!
//! A [`Scenegraph`] is rebuilt by its owner whenever the data, viewport or
//! overlay configuration changes; drawing only reads it.

use tracing::{debug, trace, warn};

use crate::core::{
    DataRow, ExtentTuning, LinearScale, TimeScale, calculate_shifted_positions,
    fields_extent_with_padding,
};
use crate::elements::{Element, LabelAnnotationElement, RenderableElement};
use crate::error::{ChartError, ChartResult};
use crate::render::{ContextScope, DrawingContext, PaneSlot};

/// Named group of series elements. Layers paint in the order they were
/// added to their pane.
#[derive(Debug, Default)]
pub struct Layer {
    pub name: String,
    pub elements: Vec<Element>,
}

impl Layer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }
}

/// One horizontal strip of the chart.
///
/// Paints back to front in [`PaneSlot::PAINT_ORDER`]: grid, series layers,
/// label lines, labels, annotations, axis, crosshair, axis tooltip. When a
/// value scale is given, the axis and axis tooltip slots paint in a strip
/// whose origin is the right edge of the plot.
#[derive(Debug, Default)]
pub struct Pane {
    pub id: String,
    pub original_data: Vec<DataRow>,
    pub y_encoding_fields: Vec<String>,
    pub y_domain: Option<(f64, f64)>,
    layers: Vec<Layer>,
    pub grid: Option<Element>,
    pub axis: Option<Element>,
    pub axis_tooltip: Option<Element>,
    pub crosshair: Option<Element>,
    pub annotations: Vec<Element>,
    pub labels: Vec<LabelAnnotationElement>,
    pub label_lines: Vec<Element>,
}

impl Pane {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_data(mut self, rows: Vec<DataRow>, y_encoding_fields: Vec<String>) -> Self {
        self.original_data = rows;
        self.y_encoding_fields = y_encoding_fields;
        self
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Returns the named layer, appending an empty one on top if absent.
    pub fn layer_mut(&mut self, name: &str) -> &mut Layer {
        let index = match self.layers.iter().position(|layer| layer.name == name) {
            Some(index) => index,
            None => {
                self.layers.push(Layer::new(name));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }

    /// Appends `layer` above every existing layer.
    pub fn push_layer(&mut self, layer: Layer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Computes and stores the padded extent of the y-encoding fields.
    ///
    /// Leaves the domain unset when no finite values exist.
    pub fn resolve_y_domain(&mut self, tuning: ExtentTuning) -> Option<(f64, f64)> {
        self.y_domain =
            fields_extent_with_padding(&self.original_data, &self.y_encoding_fields, tuning);
        if self.y_domain.is_none() {
            debug!(pane = %self.id, "no finite values for y-domain");
        }
        self.y_domain
    }

    /// Value scale mapping the resolved y-domain onto `[height, 0]`.
    pub fn value_scale(&self, height: f64) -> ChartResult<LinearScale> {
        let domain = self.y_domain.ok_or_else(|| {
            ChartError::InvalidScale(format!("pane `{}` has no resolved y-domain", self.id))
        })?;
        LinearScale::new(domain, (height, 0.0))
    }

    /// Draws every slot of the pane in paint order.
    pub fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        for slot in PaneSlot::PAINT_ORDER {
            trace!(pane = %self.id, ?slot, "draw pane slot");
            self.draw_slot(slot, context, time_scale, value_scale, pixel_ratio)?;
        }
        Ok(())
    }

    fn draw_slot(
        &self,
        slot: PaneSlot,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        let draw_all = |context: &mut dyn DrawingContext, elements: &[Element]| {
            draw_elements(context, elements, time_scale, value_scale, pixel_ratio)
        };

        match slot {
            PaneSlot::Grid => draw_all(context, self.grid.as_slice()),
            PaneSlot::Series => self
                .layers
                .iter()
                .try_for_each(|layer| draw_all(&mut *context, &layer.elements)),
            PaneSlot::LabelLines => draw_all(context, &self.label_lines),
            PaneSlot::Labels => {
                self.draw_labels(context, time_scale, value_scale);
                Ok(())
            }
            PaneSlot::Annotations => draw_all(context, &self.annotations),
            PaneSlot::Axis | PaneSlot::AxisTooltip => {
                let element = if slot == PaneSlot::Axis {
                    &self.axis
                } else {
                    &self.axis_tooltip
                };
                let Some(element) = element else {
                    return Ok(());
                };
                let mut scope = ContextScope::new(context);
                if let (Some(time_scale), Some(_)) = (time_scale, value_scale) {
                    let (left, right) = time_scale.range();
                    scope.translate(left.max(right), 0.0);
                }
                element.draw(&mut *scope, time_scale, value_scale, pixel_ratio)
            }
            PaneSlot::Crosshair => draw_all(context, self.crosshair.as_slice()),
        }
    }

    /// Labels pin to the left edge of the plot and are pushed apart so rows
    /// never overlap.
    fn draw_labels(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: Option<&TimeScale>,
        value_scale: Option<&LinearScale>,
    ) {
        let Some(value_scale) = value_scale else {
            if !self.labels.is_empty() {
                warn!(pane = %self.id, "labels skipped without a value scale");
            }
            return;
        };
        let positions: Vec<f64> = self
            .labels
            .iter()
            .map(|label| value_scale.map(label.value))
            .collect();
        let row_height = self
            .labels
            .iter()
            .map(LabelAnnotationElement::height)
            .fold(0.0, f64::max);
        let left = time_scale.map_or(0.0, |scale| scale.range().0);

        for (label, y) in self
            .labels
            .iter()
            .zip(calculate_shifted_positions(&positions, row_height))
        {
            label.draw_at(context, left, y);
        }
    }
}

fn draw_elements(
    context: &mut dyn DrawingContext,
    elements: &[Element],
    time_scale: Option<&TimeScale>,
    value_scale: Option<&LinearScale>,
    pixel_ratio: f64,
) -> ChartResult<()> {
    for element in elements {
        element.draw(&mut *context, time_scale, value_scale, pixel_ratio)?;
    }
    Ok(())
}

/// All panes of one frame, top to bottom, plus the shared time axis.
#[derive(Debug, Default)]
pub struct Scenegraph {
    pub panes: Vec<Pane>,
    /// Drawn with a time scale only. Elements that need a value scale, such
    /// as a crosshair, fail the frame with `InvalidScale` here; put the
    /// time label in `axis_tooltip` as an [`XAxisAnnotationElement`] instead.
    ///
    /// [`XAxisAnnotationElement`]: crate::elements::XAxisAnnotationElement
    pub x_axis: Pane,
}

impl Scenegraph {
    #[must_use]
    pub fn new(panes: Vec<Pane>, x_axis: Pane) -> Self {
        Self { panes, x_axis }
    }

    #[must_use]
    pub fn pane(&self, id: &str) -> Option<&Pane> {
        self.panes.iter().find(|pane| pane.id == id)
    }

    pub fn pane_mut(&mut self, id: &str) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|pane| pane.id == id)
    }

    /// Resolves every pane's y-domain.
    pub fn resolve_y_domains(&mut self, tuning: ExtentTuning) {
        for pane in &mut self.panes {
            pane.resolve_y_domain(tuning);
        }
    }

    /// Stacks the panes vertically with the given heights, then draws the
    /// time axis below them.
    ///
    /// Panes without a resolved y-domain are skipped.
    pub fn draw(
        &self,
        context: &mut dyn DrawingContext,
        time_scale: &TimeScale,
        heights: &[f64],
        pixel_ratio: f64,
    ) -> ChartResult<()> {
        if heights.len() != self.panes.len() {
            return Err(ChartError::InvalidData(format!(
                "expected {} pane heights, got {}",
                self.panes.len(),
                heights.len()
            )));
        }
        debug!(panes = self.panes.len(), "draw scenegraph");

        let mut offset = 0.0;
        for (pane, &height) in self.panes.iter().zip(heights) {
            if !height.is_finite() || height < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "pane `{}` height must be finite and >= 0",
                    pane.id
                )));
            }
            if pane.y_domain.is_some() {
                let value_scale = pane.value_scale(height)?;
                let mut scope = ContextScope::new(&mut *context);
                scope.translate(0.0, offset);
                pane.draw(&mut *scope, Some(time_scale), Some(&value_scale), pixel_ratio)?;
            } else {
                warn!(pane = %pane.id, "pane skipped without a y-domain");
            }
            offset += height;
        }

        let mut scope = ContextScope::new(context);
        scope.translate(0.0, offset);
        self.x_axis
            .draw(&mut *scope, Some(time_scale), None, pixel_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::Pane;
    use crate::elements::Element;

    #[test]
    fn layer_mut_appends_missing_layers_on_top() {
        let mut pane = Pane::new("main");
        pane.layer_mut("candles").push(Element::Dummy);
        pane.layer_mut("overlay").push(Element::Dummy);
        pane.layer_mut("candles").push(Element::Dummy);

        let names: Vec<&str> = pane.layers().iter().map(|layer| layer.name.as_str()).collect();
        assert_eq!(names, vec!["candles", "overlay"]);
        assert_eq!(pane.layer("candles").map(|layer| layer.elements.len()), Some(2));
    }
}
