use tracing::debug;

use crate::core::{LinearScale, TimeScale};
use crate::error::ChartResult;
use crate::pane::Pane;
use crate::scenegraph::{DisplayKind, DisplayObject, Graphics, NodeId, Stage};

/// Mounts the series layers of `pane` into `stage` as retained nodes.
///
/// Returns a root container holding one container per layer, in layer order.
/// Each element that can be recorded becomes one graphics node; the rest are
/// left to immediate-mode drawing.
///
/// Every call inserts fresh nodes. To remount a pane, pass the previous root
/// to [`Stage::destroy_subtree`] first or the stage keeps growing.
pub fn mount_pane(
    stage: &mut Stage,
    pane: &Pane,
    time_scale: &TimeScale,
    value_scale: &LinearScale,
    resolution: f64,
) -> ChartResult<NodeId> {
    let root = stage.create_container();
    let mut mounted = 0usize;
    let mut skipped = 0usize;

    for layer in pane.layers() {
        let container = stage.create_container();
        stage.add_child(root, container)?;

        for element in &layer.elements {
            let mut graphics = Graphics::new();
            if element.record(&mut graphics, Some(time_scale), Some(value_scale), resolution)? {
                let node = stage.insert(DisplayObject::new(DisplayKind::Graphics(graphics)));
                stage.add_child(container, node)?;
                mounted += 1;
            } else {
                skipped += 1;
            }
        }
    }

    debug!(pane = %pane.id, mounted, skipped, "mounted pane into stage");
    Ok(root)
}
