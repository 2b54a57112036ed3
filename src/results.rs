//! Rendering of the returned suggestion text

mod results_render;

pub use results_render::{render_results, result_lines};
