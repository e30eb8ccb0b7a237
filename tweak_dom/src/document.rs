// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element document: tree, classes, geometry, listeners, and stylesheets.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::error::DomError;
use crate::event::{Handler, PointerEvent};
use crate::types::{ElementId, EventKind, EventTarget, InlineStyle, Length, ListenerId};

struct Listener {
    kind: EventKind,
    id: ListenerId,
    handler: Handler,
}

#[derive(Default)]
struct Listeners {
    entries: SmallVec<[Listener; 2]>,
}

impl Listeners {
    fn push(&mut self, kind: EventKind, id: ListenerId, handler: Handler) {
        self.entries.push(Listener { kind, id, handler });
    }

    fn remove(&mut self, kind: EventKind, id: ListenerId) -> bool {
        match self
            .entries
            .iter()
            .position(|l| l.kind == kind && l.id == id)
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn contains(&self, kind: EventKind, id: ListenerId) -> bool {
        self.entries.iter().any(|l| l.kind == kind && l.id == id)
    }

    fn count(&self, kind: EventKind) -> usize {
        self.entries.iter().filter(|l| l.kind == kind).count()
    }

    fn snapshot(&self, kind: EventKind) -> SmallVec<[(ListenerId, Handler); 2]> {
        self.entries
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| (l.id, l.handler.clone()))
            .collect()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|l| (l.kind, l.id)))
            .finish()
    }
}

#[derive(Debug, Default)]
struct Element {
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
    classes: SmallVec<[Box<str>; 2]>,
    bounds: Rect,
    hidden: bool,
    style: InlineStyle,
    text: Option<String>,
    listeners: Listeners,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

#[derive(Debug, Default)]
struct StyleRegistry {
    sheets: Vec<Rc<str>>,
    seen: HashSet<Rc<str>>,
}

/// A headless element document.
///
/// Elements live in a generational slot arena. The host's layout pass writes
/// each element's parent-relative bounds with [`set_bounds`](Self::set_bounds);
/// widgets read them back with [`offset`](Self::offset) and
/// [`width`](Self::width). Pointer events are routed with
/// [`dispatch`](Self::dispatch), bubbling from the target through its
/// ancestors to the [`EventTarget::Window`].
#[derive(Default)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<ElementId>,
    window: Listeners,
    next_listener: u64,
    styles: StyleRegistry,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- tree ---

    /// Creates a detached element with empty bounds.
    pub fn create_element(&mut self) -> ElementId {
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.element = Some(Element::default());
            ElementId::new(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "element counts stay far below u32::MAX"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                element: Some(Element::default()),
            });
            ElementId::new(idx, 1)
        };
        self.roots.push(id);
        id
    }

    /// Returns `true` if `id` refers to a live element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.slots.iter().filter(|s| s.element.is_some()).count()
    }

    /// Returns the parent of `id`, if it has one.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id)?.parent
    }

    /// Returns the children of `id` in document order.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id).map_or(&[], |e| &e.children)
    }

    /// Returns the parentless elements in document order.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Moves `child` (and its subtree) to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), DomError> {
        self.live(parent)?;
        self.live(child)?;
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(DomError::WouldCycle { parent, child });
            }
            cursor = self.parent(node);
        }
        self.detach(child);
        self.live_mut(parent)?.children.push(child);
        self.live_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Removes `id` and its whole subtree, dropping their listeners.
    ///
    /// Window listeners are not touched.
    pub fn remove(&mut self, id: ElementId) -> Result<(), DomError> {
        self.live(id)?;
        self.detach(id);
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            let slot = &mut self.slots[node.idx()];
            if let Some(element) = slot.element.take() {
                stack.extend(element.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(node.0);
            }
        }
        log::trace!("removed element {id:?}");
        Ok(())
    }

    // --- classes ---

    /// Adds `class` unless the element already has it.
    pub fn add_class(&mut self, id: ElementId, class: &str) -> Result<(), DomError> {
        let element = self.live_mut(id)?;
        if !element.classes.iter().any(|c| &**c == class) {
            element.classes.push(class.into());
        }
        Ok(())
    }

    /// Removes `class`, returning whether it was present.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> Result<bool, DomError> {
        let element = self.live_mut(id)?;
        let before = element.classes.len();
        element.classes.retain(|c| &**c != class);
        Ok(element.classes.len() != before)
    }

    /// Returns `true` if the element has `class`.
    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|e| e.classes.iter().any(|c| &**c == class))
    }

    /// Returns the element's classes in insertion order.
    pub fn classes(&self, id: ElementId) -> impl Iterator<Item = &str> {
        self.element(id)
            .into_iter()
            .flat_map(|e| e.classes.iter().map(|c| &**c))
    }

    // --- inline style and text ---

    /// Returns the element's inline style.
    #[must_use]
    pub fn style(&self, id: ElementId) -> Option<&InlineStyle> {
        self.element(id).map(|e| &e.style)
    }

    /// Sets the inline `width`.
    pub fn set_width(&mut self, id: ElementId, width: Length) -> Result<(), DomError> {
        self.live_mut(id)?.style.width = Some(width);
        Ok(())
    }

    /// Replaces the element's text content.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), DomError> {
        self.live_mut(id)?.text = Some(text.into());
        Ok(())
    }

    /// Returns the element's text content.
    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.element(id)?.text.as_deref()
    }

    // --- geometry ---

    /// Sets the element's bounds relative to its parent's origin.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) -> Result<(), DomError> {
        self.live_mut(id)?.bounds = bounds;
        Ok(())
    }

    /// Returns the element's parent-relative bounds.
    #[must_use]
    pub fn bounds(&self, id: ElementId) -> Option<Rect> {
        self.element(id).map(|e| e.bounds)
    }

    /// Hides or shows the element and its subtree.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> Result<(), DomError> {
        self.live_mut(id)?.hidden = hidden;
        Ok(())
    }

    /// Returns `true` if the element and all its ancestors are alive and shown.
    #[must_use]
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            match self.element(node) {
                Some(e) if !e.hidden => cursor = e.parent,
                _ => return false,
            }
        }
        true
    }

    /// Returns the element's page offset: its origin plus every ancestor's origin.
    #[must_use]
    pub fn offset(&self, id: ElementId) -> Option<Point> {
        let mut origin = Point::ZERO;
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            let element = self.element(node)?;
            origin += element.bounds.origin().to_vec2();
            cursor = element.parent;
        }
        Some(origin)
    }

    /// Returns the element's rendered width.
    ///
    /// Stale and hidden elements (including those under a hidden ancestor)
    /// have zero width.
    #[must_use]
    pub fn width(&self, id: ElementId) -> f64 {
        if !self.is_rendered(id) {
            return 0.0;
        }
        self.element(id).map_or(0.0, |e| e.bounds.width().max(0.0))
    }

    /// Returns the element's bounds in page coordinates.
    #[must_use]
    pub fn page_rect(&self, id: ElementId) -> Option<Rect> {
        let origin = self.offset(id)?;
        Some(Rect::from_origin_size(origin, self.element(id)?.bounds.size()))
    }

    /// Returns the topmost rendered element containing `point`.
    ///
    /// Later elements in document order paint over earlier ones, and children
    /// over their parents.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        let mut hit = None;
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            let Some(element) = self.element(node) else {
                continue;
            };
            if element.hidden {
                continue;
            }
            if self.page_rect(node).is_some_and(|r| r.contains(point)) {
                hit = Some(node);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        hit
    }

    // --- listeners ---

    /// Attaches `handler` for `kind` events on `target`.
    ///
    /// Returns a handle for [`unbind`](Self::unbind). Binding the same
    /// closure twice produces two independent listeners.
    pub fn bind(
        &mut self,
        target: impl Into<EventTarget>,
        kind: EventKind,
        handler: impl Fn(&mut Self, &mut PointerEvent) + 'static,
    ) -> Result<ListenerId, DomError> {
        let id = ListenerId(self.next_listener);
        self.listeners_mut(target.into())?
            .push(kind, id, Rc::new(handler));
        self.next_listener += 1;
        Ok(id)
    }

    /// Detaches a listener, returning `true` if it was still bound.
    pub fn unbind(&mut self, target: impl Into<EventTarget>, kind: EventKind, id: ListenerId) -> bool {
        self.listeners_mut(target.into())
            .is_ok_and(|listeners| listeners.remove(kind, id))
    }

    /// Returns `true` if the listener is bound on `target` for `kind`.
    #[must_use]
    pub fn is_bound(&self, target: impl Into<EventTarget>, kind: EventKind, id: ListenerId) -> bool {
        self.listeners(target.into())
            .is_some_and(|listeners| listeners.contains(kind, id))
    }

    /// Returns how many listeners for `kind` are bound on `target`.
    #[must_use]
    pub fn listener_count(&self, target: impl Into<EventTarget>, kind: EventKind) -> usize {
        self.listeners(target.into())
            .map_or(0, |listeners| listeners.count(kind))
    }

    /// Routes `event` from `target` through its ancestors to the window.
    ///
    /// Each hop's listeners are snapshotted when the hop is reached: listeners
    /// bound during dispatch wait for the next event, and listeners unbound
    /// before their turn are skipped. A stale target receives nothing.
    ///
    /// Returns the event so the caller can inspect
    /// [`default_prevented`](PointerEvent::default_prevented).
    pub fn dispatch(&mut self, target: impl Into<EventTarget>, mut event: PointerEvent) -> PointerEvent {
        let kind = event.kind();
        for hop in self.propagation_path(target.into()) {
            let Some(snapshot) = self.listeners(hop).map(|l| l.snapshot(kind)) else {
                continue;
            };
            for (id, handler) in snapshot {
                if self.is_bound(hop, kind, id) {
                    handler(self, &mut event);
                }
            }
        }
        event
    }

    /// Hit-tests the event position and dispatches to the element found there,
    /// or to the window when nothing is hit.
    pub fn dispatch_at(&mut self, event: PointerEvent) -> PointerEvent {
        let target = self
            .hit_test(event.position())
            .map_or(EventTarget::Window, EventTarget::Element);
        self.dispatch(target, event)
    }

    // --- stylesheets ---

    /// Injects a stylesheet unless identical text was injected before.
    ///
    /// Returns `true` only for the first injection of a given text.
    pub fn inject_stylesheet(&mut self, css: &str) -> bool {
        if self.styles.seen.contains(css) {
            return false;
        }
        let sheet: Rc<str> = Rc::from(css);
        self.styles.seen.insert(sheet.clone());
        self.styles.sheets.push(sheet);
        log::debug!(
            "injected stylesheet #{} ({} bytes)",
            self.styles.sheets.len(),
            css.len()
        );
        true
    }

    /// Returns the injected stylesheets in injection order.
    pub fn stylesheets(&self) -> impl Iterator<Item = &str> {
        self.styles.sheets.iter().map(|s| &**s)
    }

    // --- internals ---

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.element.as_ref())
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.element.as_mut())
    }

    fn live(&self, id: ElementId) -> Result<&Element, DomError> {
        self.element(id).ok_or(DomError::StaleElement(id))
    }

    fn live_mut(&mut self, id: ElementId) -> Result<&mut Element, DomError> {
        self.element_mut(id).ok_or(DomError::StaleElement(id))
    }

    fn detach(&mut self, id: ElementId) {
        match self.parent(id) {
            Some(parent) => {
                if let Some(element) = self.element_mut(parent) {
                    element.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        if let Some(element) = self.element_mut(id) {
            element.parent = None;
        }
    }

    fn listeners(&self, target: EventTarget) -> Option<&Listeners> {
        match target {
            EventTarget::Window => Some(&self.window),
            EventTarget::Element(id) => self.element(id).map(|e| &e.listeners),
        }
    }

    fn listeners_mut(&mut self, target: EventTarget) -> Result<&mut Listeners, DomError> {
        match target {
            EventTarget::Window => Ok(&mut self.window),
            EventTarget::Element(id) => self.live_mut(id).map(|e| &mut e.listeners),
        }
    }

    fn propagation_path(&self, target: EventTarget) -> SmallVec<[EventTarget; 8]> {
        let mut path = SmallVec::new();
        if let EventTarget::Element(id) = target {
            if !self.is_alive(id) {
                return path;
            }
            let mut cursor = Some(id);
            while let Some(node) = cursor {
                path.push(EventTarget::Element(node));
                cursor = self.parent(node);
            }
        }
        path.push(EventTarget::Window);
        path
    }
}

// Manual Debug impl since handlers aren't Debug
impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("elements", &self.element_count())
            .field("roots", &self.roots)
            .field("window_listeners", &self.window)
            .field("stylesheets", &self.styles.sheets.len())
            .finish_non_exhaustive()
    }
}
