//! Sheet layout engine: turns grouped sticker orders into drawing
//! operations against an abstract surface. One page is a background image,
//! four corner registration marks, a border rectangle, a centered 2x2
//! table, and one inner grid of labeled color-cycled boxes per quadrant.
//! All geometry derives from the order's size category.
//!
//! The engine performs no I/O and owns no rasterizer; backends implement
//! [`surface::Surface`] and callers hand a loaded background plus a surface
//! of the right size to [`compose::compose_page`].

pub mod color;
pub mod compose;
pub mod export;
pub mod order;
pub mod profile;
pub mod surface;

pub use color::{BoxColor, Quadrant};
pub use compose::{compose_page, fit_text, page_size};
pub use order::{group_orders, OrderGroup, OrderRow, SizeCategory, LABELS_PER_PAGE};
pub use profile::{Orientation, SizeProfile};
pub use surface::{Color, Point, Rect, Surface, TextAlign, TextBaseline};
