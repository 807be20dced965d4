//! cellseg-editor — interactive polygon editing engine for cell
//! segmentation results.
//!
//! A headless core for browser-style segmentation editors: it consumes
//! pointer and keyboard events, owns the editing state machines (free
//! draw, slicing, point adding, vertex drag, pan), and produces immutable
//! updates of a [`SegmentationResult`]. Rendering and persistence belong
//! to the host application.

pub mod constants;
pub mod editor;
pub mod error;
pub mod events;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod model;
pub mod modes;
pub mod notify;
pub mod simplify;
pub mod transform;

pub use editor::Editor;
pub use error::EditError;
pub use events::{Key, PointerEvent};
pub use interaction::{InteractionState, SegmentHit, VertexRef};
pub use model::{Point, Polygon, PolygonKind, SegmentationResult};
pub use modes::EditorMode;
pub use notify::{LogNotifier, Notifier};
pub use transform::{ContainerRect, ViewTransform};
