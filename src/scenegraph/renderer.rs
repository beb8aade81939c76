use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{ContextScope, DrawingContext};
use crate::scenegraph::{DisplayKind, NodeId, Stage};

/// Walks a retained tree and replays it against one drawing context.
///
/// The context is left exactly as found after every pass: the whole pass and
/// every visible subtree run inside their own [`ContextScope`].
#[derive(Debug)]
pub struct CanvasRenderer<C: DrawingContext> {
    context: C,
    resolution: f64,
}

impl<C: DrawingContext> CanvasRenderer<C> {
    pub fn new(context: C, resolution: f64) -> ChartResult<Self> {
        validate_resolution(resolution)?;
        Ok(Self {
            context,
            resolution,
        })
    }

    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: f64) -> ChartResult<()> {
        validate_resolution(resolution)?;
        self.resolution = resolution;
        Ok(())
    }

    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    #[must_use]
    pub fn into_context(self) -> C {
        self.context
    }

    /// Draws `root` and its visible descendants in child-list order.
    pub fn render(&mut self, stage: &Stage, root: NodeId) -> ChartResult<()> {
        if !stage.contains(root) {
            return Err(ChartError::UnknownNode(root));
        }
        debug!(
            nodes = stage.visible_count(root),
            resolution = self.resolution,
            "render retained scene"
        );

        let mut scope = ContextScope::new(&mut self.context);
        scope.scale(self.resolution, self.resolution);
        render_node(&mut *scope, stage, root)
    }
}

fn render_node<C: DrawingContext + ?Sized>(
    context: &mut C,
    stage: &Stage,
    id: NodeId,
) -> ChartResult<()> {
    let node = stage.get(id).ok_or(ChartError::UnknownNode(id))?;
    if !node.visible {
        return Ok(());
    }

    let mut scope = ContextScope::new(context);
    if node.x != 0.0 || node.y != 0.0 {
        scope.translate(node.x, node.y);
    }
    match node.kind() {
        DisplayKind::Container => {}
        DisplayKind::Graphics(graphics) => graphics.render(&mut *scope),
        DisplayKind::Text(text) => text.render(&mut *scope),
    }
    for child in node.children() {
        render_node(&mut *scope, stage, *child)?;
    }
    Ok(())
}

fn validate_resolution(resolution: f64) -> ChartResult<()> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(ChartError::InvalidData(
            "renderer resolution must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
