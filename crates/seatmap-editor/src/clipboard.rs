//! Typed clipboard for copy/cut/paste.

use crate::model::{Seat, SeatGroup, Shape, TextLabel};

/// What a copy captured. Seat copies carry the owning groups so a pasted
/// row stays a row; shape copies carry their attached labels.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardContent {
    Seats {
        seats: Vec<Seat>,
        groups: Vec<SeatGroup>,
    },
    Shape {
        shape: Shape,
        labels: Vec<TextLabel>,
    },
    Text(TextLabel),
}

/// Single-slot clipboard. A new copy replaces the previous content; the
/// slot survives paste so repeated pastes stamp repeated copies.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    content: Option<ClipboardContent>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, content: ClipboardContent) {
        self.content = Some(content);
    }

    pub fn get(&self) -> Option<&ClipboardContent> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
