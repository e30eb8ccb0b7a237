// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable slider for a bounded numeric property.
//!
//! ## Interaction
//!
//! 1) A primary-button press on the track starts a drag session (other
//!    buttons are ignored): move and release listeners
//!    are bound on the window, so the drag keeps working once the pointer
//!    leaves the track. The press itself is handled as the first move, so a
//!    plain click sets the value too.
//! 2) Each move maps the pointer's x coordinate linearly from the track's
//!    page extent onto `[min, max]` and writes it through the property, which
//!    clamps and quantizes. A zero-width track skips the move.
//! 3) A release anywhere unbinds both window listeners and fires the
//!    property's finish callback once, with the value read back from the
//!    property.
//!
//! Every accepted write refreshes the fill, whose width is the clamped
//! fraction `(value - min) / (max - min)`, or `0` for an empty range.

use alloc::rc::{Rc, Weak};
use core::cell::Cell;

use tweak_dom::{
    Buttons, Document, DomError, ElementId, EventKind, EventTarget, Length, ListenerId,
    PointerEvent,
};
use tweak_property::{NumberProperty, NumberRange, PropertyError, PropertyTarget};

use crate::controller::{DisplayRefreshable, ValueBound};
use crate::error::ControllerError;
use crate::number::NumberController;
use crate::style::{DEFAULT_STYLESHEET, FILL_CLASS, TRACK_CLASS};

/// Window listeners installed for one drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct DragSession {
    on_move: ListenerId,
    on_up: ListenerId,
}

/// Shared with the release listener so it can unbind the session even when
/// the slider itself is gone.
type SessionSlot = Rc<Cell<Option<DragSession>>>;

#[derive(Debug)]
struct SliderInner {
    controller: NumberController,
    track: ElementId,
    fill: ElementId,
}

impl SliderInner {
    fn fill_fraction(&self) -> f64 {
        let property = self.controller.property();
        fill_fraction(property.value(), property.min(), property.max())
    }

    /// Maps a client x coordinate onto the property range.
    ///
    /// Returns `None` while the track has no width.
    fn value_at(&self, doc: &Document, client_x: f64) -> Option<f64> {
        let width = doc.width(self.track);
        if width <= 0.0 || !width.is_finite() {
            return None;
        }
        let left = doc.offset(self.track)?.x;
        let property = self.controller.property();
        Some(map_range(
            client_x,
            left,
            left + width,
            property.min(),
            property.max(),
        ))
    }

    fn drag(&self, doc: &mut Document, event: &mut PointerEvent) {
        event.prevent_default();
        match self.value_at(doc, event.client_x()) {
            Some(value) => {
                let accepted = self.set_value(doc, value);
                log::trace!("slider {:?} dragged to {value} (accepted {accepted})", self.track);
            }
            None => log::trace!("slider {:?} has no width; ignoring drag", self.track),
        }
    }
}

impl DisplayRefreshable for SliderInner {
    fn refresh_display(&self, doc: &mut Document) {
        let percent = self.fill_fraction() * 100.0;
        if let Err(err) = doc.set_width(self.fill, Length::Percent(percent)) {
            log::debug!("skipping fill refresh: {err}");
        }
        self.controller.refresh_display(doc);
    }
}

impl ValueBound for SliderInner {
    fn property(&self) -> &Rc<NumberProperty> {
        self.controller.property()
    }
}

/// A slider bound to a numeric property with a finite range.
///
/// The slider builds a track element (class [`TRACK_CLASS`]) holding a fill
/// element (class [`FILL_CLASS`]) and appends the track to its controller's
/// container. The host lays out the track; the slider reads its geometry
/// back on every drag.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::{Point, Rect};
/// use tweak_controllers::{NumberSlider, ValueBound};
/// use tweak_dom::{Document, EventTarget, PointerEvent};
/// use tweak_property::NumberRange;
///
/// let mut doc = Document::new();
/// let opacity = Rc::new(Cell::new(0.0_f64));
/// let slider =
///     NumberSlider::from_target(&mut doc, opacity.clone(), NumberRange::new(0.0, 100.0)).unwrap();
/// doc.set_bounds(slider.track(), Rect::new(100.0, 0.0, 300.0, 16.0)).unwrap();
///
/// doc.dispatch(slider.track(), PointerEvent::mouse_down(Point::new(150.0, 8.0)));
/// assert_eq!(opacity.get(), 25.0);
///
/// // The drag continues outside the track and the value clamps.
/// doc.dispatch(EventTarget::Window, PointerEvent::mouse_drag(Point::new(900.0, 8.0)));
/// doc.dispatch(EventTarget::Window, PointerEvent::mouse_up(Point::new(900.0, 8.0)));
/// assert_eq!(slider.value(), 100.0);
/// assert_eq!(slider.fill_fraction(), 1.0);
/// ```
#[derive(Debug)]
pub struct NumberSlider {
    inner: Rc<SliderInner>,
    session: SessionSlot,
    drag_start: ListenerId,
}

impl NumberSlider {
    /// Builds a slider around `controller` and draws the initial fill.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::StaleElement`] if the controller's container is no
    /// longer in `doc`. Nothing is created in that case.
    pub fn new(doc: &mut Document, controller: NumberController) -> Result<Self, DomError> {
        let container = controller.dom_element();
        if !doc.is_alive(container) {
            return Err(DomError::StaleElement(container));
        }

        let track = doc.create_element();
        let fill = doc.create_element();
        doc.add_class(track, TRACK_CLASS)?;
        doc.add_class(fill, FILL_CLASS)?;

        let inner = Rc::new(SliderInner {
            controller,
            track,
            fill,
        });
        let session = SessionSlot::default();
        let drag_start = doc.bind(track, EventKind::MouseDown, {
            let inner = Rc::downgrade(&inner);
            let session = session.clone();
            move |doc: &mut Document, event: &mut PointerEvent| {
                if let Some(inner) = inner.upgrade() {
                    begin_drag(&inner, &session, doc, event);
                }
            }
        })?;

        doc.append_child(track, fill)?;
        doc.append_child(container, track)?;

        let slider = Self {
            inner,
            session,
            drag_start,
        };
        slider.refresh_display(doc);
        Ok(slider)
    }

    /// Binds `target` to `range` and builds a slider for it in one step.
    pub fn from_target(
        doc: &mut Document,
        target: impl PropertyTarget + 'static,
        range: NumberRange,
    ) -> Result<Self, ControllerError> {
        let property = Rc::new(NumberProperty::new(target, range)?);
        let controller = NumberController::new(doc, property)?;
        Ok(Self::new(doc, controller)?)
    }

    /// Injects [`DEFAULT_STYLESHEET`] into the document.
    ///
    /// Returns `true` the first time; later calls change nothing.
    pub fn use_default_styles(doc: &mut Document) -> bool {
        doc.inject_stylesheet(DEFAULT_STYLESHEET)
    }

    /// Returns the wrapped controller.
    #[must_use]
    pub fn controller(&self) -> &NumberController {
        &self.inner.controller
    }

    /// Returns the controller's container, which holds the track.
    #[must_use]
    pub fn dom_element(&self) -> ElementId {
        self.inner.controller.dom_element()
    }

    /// Returns the background track element.
    #[must_use]
    pub fn track(&self) -> ElementId {
        self.inner.track
    }

    /// Returns the foreground fill element.
    #[must_use]
    pub fn fill(&self) -> ElementId {
        self.inner.fill
    }

    /// Returns `true` between a press on the track and the next release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.get().is_some()
    }

    /// Returns the fraction of the track the fill covers, in `[0, 1]`.
    #[must_use]
    pub fn fill_fraction(&self) -> f64 {
        self.inner.fill_fraction()
    }

    /// Replaces the property's minimum and redraws the fill.
    pub fn set_min(&self, doc: &mut Document, min: f64) -> Result<(), PropertyError> {
        self.property().set_min(min)?;
        self.refresh_display(doc);
        Ok(())
    }

    /// Replaces the property's maximum and redraws the fill.
    pub fn set_max(&self, doc: &mut Document, max: f64) -> Result<(), PropertyError> {
        self.property().set_max(max)?;
        self.refresh_display(doc);
        Ok(())
    }

    /// Replaces the property's step and redraws.
    pub fn set_step(&self, doc: &mut Document, step: f64) -> Result<(), PropertyError> {
        self.property().set_step(step)?;
        self.refresh_display(doc);
        Ok(())
    }

    /// Tears the slider down: releases an active drag without a finish
    /// notification and removes the controller's container.
    pub fn remove(self, doc: &mut Document) -> Result<(), DomError> {
        if let Some(active) = self.session.take() {
            release(doc, active);
        }
        doc.unbind(self.inner.track, EventKind::MouseDown, self.drag_start);
        doc.remove(self.inner.controller.dom_element())
    }
}

impl DisplayRefreshable for NumberSlider {
    fn refresh_display(&self, doc: &mut Document) {
        self.inner.refresh_display(doc);
    }
}

impl ValueBound for NumberSlider {
    fn property(&self) -> &Rc<NumberProperty> {
        self.inner.property()
    }
}

fn begin_drag(
    inner: &Rc<SliderInner>,
    session: &SessionSlot,
    doc: &mut Document,
    event: &mut PointerEvent,
) {
    if !event.buttons().contains(Buttons::PRIMARY) {
        log::trace!("slider {:?} ignoring non-primary press", inner.track);
        return;
    }
    if session.get().is_none() {
        match install(inner, session, doc) {
            Ok(active) => {
                session.set(Some(active));
                log::debug!("slider {:?} drag started", inner.track);
            }
            Err(err) => log::warn!("slider {:?} could not start a drag: {err}", inner.track),
        }
    }
    inner.drag(doc, event);
}

fn install(
    inner: &Rc<SliderInner>,
    session: &SessionSlot,
    doc: &mut Document,
) -> Result<DragSession, DomError> {
    let on_move = doc.bind(EventTarget::Window, EventKind::MouseMove, {
        let inner = Rc::downgrade(inner);
        move |doc: &mut Document, event: &mut PointerEvent| {
            if let Some(inner) = inner.upgrade() {
                inner.drag(doc, event);
            }
        }
    })?;
    let on_up = doc.bind(EventTarget::Window, EventKind::MouseUp, {
        let inner = Rc::downgrade(inner);
        let session = session.clone();
        move |doc: &mut Document, _: &mut PointerEvent| end_drag(&inner, &session, doc)
    })?;
    Ok(DragSession { on_move, on_up })
}

fn end_drag(inner: &Weak<SliderInner>, session: &SessionSlot, doc: &mut Document) {
    let Some(active) = session.take() else {
        return;
    };
    release(doc, active);
    if let Some(inner) = inner.upgrade() {
        log::debug!("slider {:?} drag finished", inner.track);
        inner.controller.property().finish_change();
    }
}

fn release(doc: &mut Document, active: DragSession) {
    doc.unbind(EventTarget::Window, EventKind::MouseMove, active.on_move);
    doc.unbind(EventTarget::Window, EventKind::MouseUp, active.on_up);
}

/// Linearly maps `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    out_lo + (out_hi - out_lo) * ((value - in_lo) / (in_hi - in_lo))
}

/// Fraction of `[min, max]` covered by `value`, clamped to `[0, 1]`.
///
/// An empty range and a NaN value both yield `0`.
fn fill_fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 || span.is_nan() {
        return 0.0;
    }
    let fraction = (value - min) / span;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
