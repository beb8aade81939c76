use crate::core::{Curve, Point, align};
use crate::error::ChartResult;
use crate::render::{TextAlign, TextBaseline};
use crate::scenegraph::{NodeId, Stage, Text};
use crate::theme::AxisStyle;

/// Value axis drawn along the right edge: tick marks plus labels.
///
/// Label nodes are pooled; `update` reuses them and destroys surplus ones.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalAxis {
    root: NodeId,
    ticks: NodeId,
    labels: Vec<NodeId>,
    style: AxisStyle,
}

impl VerticalAxis {
    pub fn new(stage: &mut Stage, style: AxisStyle) -> ChartResult<Self> {
        let root = stage.create_container();
        let ticks = stage.create_graphics();
        stage.add_child(root, ticks)?;
        Ok(Self {
            root,
            ticks,
            labels: Vec::new(),
            style,
        })
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn label_nodes(&self) -> &[NodeId] {
        &self.labels
    }

    /// Redraws ticks at the given `(y, label)` pairs for an axis strip of `width`.
    pub fn update(
        &mut self,
        stage: &mut Stage,
        ticks: &[(f64, String)],
        width: f64,
        resolution: f64,
    ) -> ChartResult<()> {
        let tick_length = self.style.tick_length_px;
        let graphics = stage.graphics_mut(self.ticks)?;
        graphics.clear();
        graphics.line_style(1.0, self.style.tick_color, 1.0);
        for (y, _) in ticks {
            let y = align(*y, resolution);
            graphics.draw_line(
                &[Point::new(width - tick_length, y), Point::new(width, y)],
                Curve::Linear,
            );
        }

        while self.labels.len() > ticks.len() {
            if let Some(surplus) = self.labels.pop() {
                stage.destroy(surplus);
            }
        }
        while self.labels.len() < ticks.len() {
            let label = stage.create_text(
                Text::new("", self.style.text_color, self.style.font.clone())
                    .with_anchor(TextAlign::Right, TextBaseline::Middle),
            );
            stage.add_child(self.root, label)?;
            self.labels.push(label);
        }

        let label_x = width - tick_length - self.style.label_padding_px;
        for ((y, text), node) in ticks.iter().zip(&self.labels) {
            stage.text_mut(*node)?.text.clone_from(text);
            stage.set_position(*node, label_x, *y)?;
        }
        Ok(())
    }
}
