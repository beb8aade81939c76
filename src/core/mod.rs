pub mod candle;
pub mod curve;
pub mod data;
pub mod extent;
pub mod format;
pub mod interval;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use candle::Candle;
pub use curve::Curve;
pub use data::{DataRow, nearest_row_index, row_at};
pub use extent::{ExtentTuning, extent, extent_with_padding, fields_extent_with_padding};
pub use format::{format_date, format_price, format_time_tick, string2num};
pub use interval::Interval;
pub use layout::{
    align, align_span, calculate_shifted_positions, get_num_x_ticks, get_num_y_ticks,
    snap_to_device,
};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Point, Viewport};
