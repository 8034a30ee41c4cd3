//! # Seatmap Editor
//!
//! Headless core of the interactive seat layout editor. The crate owns the
//! scene model (seats, seat groups, decorative shapes, text labels), the
//! viewport transform, the tool state machine, selection, snapshot-based
//! undo/redo with a typed clipboard, and the SVG/PDF/JSON exporters.
//!
//! A hosting UI drives the editor through [`SeatMapEditor`]: pointer and key
//! events go in, the scene and selection state come out for rendering.

pub mod clipboard;
pub mod editor;
pub mod export;
pub mod history;
pub mod model;
pub mod scene;
pub mod selection;
pub mod serialization;
pub mod tools;
pub mod viewport;

pub use editor::{Key, Modifiers, SeatMapEditor};
pub use model::{Point, Seat, SeatGroup, Shape, ShapeObject, ShapeStyle, ShapeUpdate, TextLabel};
pub use scene::Scene;
pub use selection::{Selection, SelectionManager};
pub use tools::Tool;
pub use viewport::Viewport;

pub use seatmap_core::{Error, ExportError, ImportError, Result, SeatRecord, SeatStatus};
