// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document: handles, event kinds, and style values.

/// Identifier for an element in a [`Document`](crate::Document).
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On create, a free slot is taken and the handle records its current generation.
/// - On remove, the slot's generation is bumped; existing handles become stale.
/// - Stale handles never alias a different live element because the generation must match.
///
/// Use [`Document::is_alive`](crate::Document::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// Handle for a bound listener, returned by [`Document::bind`](crate::Document::bind).
///
/// Handles are never reused within one document, so unbinding a handle twice
/// is a harmless no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// Where a listener is attached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventTarget {
    /// The document-wide target every dispatch bubbles up to.
    Window,
    /// A single element.
    Element(ElementId),
}

impl From<ElementId> for EventTarget {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

/// The pointer event types the document routes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// A button was pressed.
    MouseDown,
    /// The pointer moved.
    MouseMove,
    /// A button was released.
    MouseUp,
}

bitflags::bitflags! {
    /// Pointer buttons held during an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        /// Primary (usually left) button.
        const PRIMARY   = 0b0000_0001;
        /// Secondary (usually right) button.
        const SECONDARY = 0b0000_0010;
        /// Auxiliary (usually middle) button.
        const AUXILIARY = 0b0000_0100;
    }
}

/// A length in an inline style.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing element, `0.0..=100.0` for in-bounds values.
    Percent(f64),
}

/// Inline style properties set directly on an element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    /// The `width` property, if set.
    pub width: Option<Length>,
}
