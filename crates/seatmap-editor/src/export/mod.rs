//! Export backends: vector SVG and PDF renditions of a scene.

pub mod pdf;
pub mod svg;

pub use pdf::scene_to_pdf;
pub use svg::scene_to_svg;
