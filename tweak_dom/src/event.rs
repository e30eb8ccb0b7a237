// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and listener handlers.

use alloc::rc::Rc;

use kurbo::Point;

use crate::Document;
use crate::types::{Buttons, EventKind};

/// A listener callback.
///
/// Handlers get mutable access to the document so they can read geometry,
/// restyle elements, and bind or unbind listeners while an event is routed.
pub type Handler = Rc<dyn Fn(&mut Document, &mut PointerEvent)>;

/// A pointer event in client (page) coordinates.
///
/// ```
/// use kurbo::Point;
/// use tweak_dom::{Buttons, EventKind, PointerEvent};
///
/// let mut event = PointerEvent::new(EventKind::MouseMove, Point::new(12.0, 4.0))
///     .with_buttons(Buttons::PRIMARY);
/// assert_eq!(event.client_x(), 12.0);
/// assert!(!event.default_prevented());
/// event.prevent_default();
/// assert!(event.default_prevented());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    kind: EventKind,
    position: Point,
    buttons: Buttons,
    default_prevented: bool,
}

impl PointerEvent {
    /// Creates an event with no buttons held.
    #[must_use]
    pub fn new(kind: EventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            buttons: Buttons::empty(),
            default_prevented: false,
        }
    }

    /// A primary-button press at `position`.
    #[must_use]
    pub fn mouse_down(position: Point) -> Self {
        Self::new(EventKind::MouseDown, position).with_buttons(Buttons::PRIMARY)
    }

    /// A move at `position` with the primary button held.
    #[must_use]
    pub fn mouse_drag(position: Point) -> Self {
        Self::new(EventKind::MouseMove, position).with_buttons(Buttons::PRIMARY)
    }

    /// A primary-button release at `position`.
    #[must_use]
    pub fn mouse_up(position: Point) -> Self {
        Self::new(EventKind::MouseUp, position)
    }

    /// Sets the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Returns the event kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the pointer position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the horizontal client coordinate.
    #[must_use]
    pub fn client_x(&self) -> f64 {
        self.position.x
    }

    /// Returns the vertical client coordinate.
    #[must_use]
    pub fn client_y(&self) -> f64 {
        self.position.y
    }

    /// Returns the buttons held during the event.
    #[must_use]
    pub fn buttons(&self) -> Buttons {
        self.buttons
    }

    /// Asks the host to skip its default handling (text selection, native drag).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` if a listener called [`prevent_default`](Self::prevent_default).
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
