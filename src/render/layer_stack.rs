use serde::{Deserialize, Serialize};

/// Paint slots of one pane, in back-to-front order.
///
/// Series layers paint as one slot in their own ascending order; everything
/// after them sits on top, with axes and crosshair last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaneSlot {
    Grid,
    Series,
    LabelLines,
    Labels,
    Annotations,
    Axis,
    Crosshair,
    AxisTooltip,
}

impl PaneSlot {
    pub const PAINT_ORDER: [PaneSlot; 8] = [
        PaneSlot::Grid,
        PaneSlot::Series,
        PaneSlot::LabelLines,
        PaneSlot::Labels,
        PaneSlot::Annotations,
        PaneSlot::Axis,
        PaneSlot::Crosshair,
        PaneSlot::AxisTooltip,
    ];
}
