//! Widget components for the usage widget.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb888>` for platform independence.

mod gradient;
mod primitives;
mod usage;

pub use gradient::{GradientStop, WIDGET_GRADIENT, draw_vertical_gradient, gradient_color};
pub use primitives::draw_caption;
pub use usage::UsageDonut;
