pub mod canvas_renderer;

pub use canvas_renderer::{CanvasChartRenderer, breakpoint_index_at};
