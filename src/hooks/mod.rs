//! Presentational hooks shared by the page sections.

mod mouse_move;
mod parallax;
mod scroll_animation;
mod smooth_scroll;

pub use mouse_move::{use_mouse_move, MouseMoveConfig};
pub use parallax::use_parallax;
pub use scroll_animation::use_scroll_animation;
pub use smooth_scroll::{use_smooth_scroll, ScrollTarget, SmoothScrollOptions};
