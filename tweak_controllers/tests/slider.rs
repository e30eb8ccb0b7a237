// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for `NumberSlider`.
//!
//! Each test lays the track out at page x = 100..300 unless it says otherwise
//! and drives the slider purely through dispatched pointer events.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kurbo::{Point, Rect};
use tweak_controllers::{
    ControllerError, DisplayRefreshable, FILL_CLASS, NumberController, NumberSlider, TRACK_CLASS,
    ValueBound,
};
use tweak_dom::{Buttons, Document, DomError, EventKind, EventTarget, Length, PointerEvent};
use tweak_property::{NumberProperty, NumberRange, PropertyError};

struct Harness {
    doc: Document,
    cell: Rc<Cell<f64>>,
    slider: NumberSlider,
    finished: Rc<RefCell<Vec<f64>>>,
}

fn harness(value: f64, range: NumberRange) -> Harness {
    let mut doc = Document::new();
    let cell = Rc::new(Cell::new(value));
    let property = Rc::new(NumberProperty::new(cell.clone(), range).unwrap());
    let finished = Rc::new(RefCell::new(Vec::new()));
    let sink = finished.clone();
    property.on_finish_change(move |v| sink.borrow_mut().push(v));

    let controller = NumberController::new(&mut doc, property).unwrap();
    let slider = NumberSlider::new(&mut doc, controller).unwrap();
    doc.set_bounds(slider.track(), Rect::new(100.0, 0.0, 300.0, 10.0))
        .unwrap();
    Harness {
        doc,
        cell,
        slider,
        finished,
    }
}

fn at(x: f64) -> Point {
    Point::new(x, 5.0)
}

impl Harness {
    fn press(&mut self, x: f64) -> PointerEvent {
        self.doc
            .dispatch(self.slider.track(), PointerEvent::mouse_down(at(x)))
    }

    fn drag(&mut self, x: f64) -> PointerEvent {
        self.doc
            .dispatch(EventTarget::Window, PointerEvent::mouse_drag(at(x)))
    }

    fn release(&mut self, x: f64) {
        self.doc
            .dispatch(EventTarget::Window, PointerEvent::mouse_up(at(x)));
    }

    fn fill_width(&self) -> Option<Length> {
        self.doc.style(self.slider.fill()).and_then(|s| s.width)
    }

    fn window_listeners(&self) -> usize {
        self.doc
            .listener_count(EventTarget::Window, EventKind::MouseMove)
            + self
                .doc
                .listener_count(EventTarget::Window, EventKind::MouseUp)
    }
}

#[test]
fn construction_builds_track_and_fill() {
    let h = harness(25.0, NumberRange::new(0.0, 100.0));
    let track = h.slider.track();
    let fill = h.slider.fill();

    assert!(h.doc.has_class(track, TRACK_CLASS));
    assert!(h.doc.has_class(fill, FILL_CLASS));
    assert_eq!(h.doc.children(track), &[fill]);
    assert_eq!(h.doc.parent(track), Some(h.slider.dom_element()));
    assert_eq!(h.doc.listener_count(track, EventKind::MouseDown), 1);
    assert_eq!(h.window_listeners(), 0);
    assert_eq!(h.fill_width(), Some(Length::Percent(25.0)));
    assert!(!h.slider.is_dragging());
}

#[test]
fn construction_on_removed_container_creates_nothing() {
    let mut doc = Document::new();
    let property = NumberProperty::new(Rc::new(Cell::new(0.0)), NumberRange::new(0.0, 1.0));
    let controller = NumberController::new(&mut doc, Rc::new(property.unwrap())).unwrap();
    let container = controller.dom_element();
    doc.remove(container).unwrap();
    let before = doc.element_count();

    let err = NumberSlider::new(&mut doc, controller).unwrap_err();

    assert_eq!(err, DomError::StaleElement(container));
    assert_eq!(doc.element_count(), before);
    assert!(doc.roots().is_empty());
}

#[test]
fn from_target_validates_range() {
    let mut doc = Document::new();
    let err = NumberSlider::from_target(&mut doc, Rc::new(Cell::new(0.0)), NumberRange::new(1.0, 0.0))
        .unwrap_err();
    assert_eq!(
        err,
        ControllerError::Property(PropertyError::InvertedRange { min: 1.0, max: 0.0 })
    );
    assert_eq!(doc.element_count(), 0);
}

#[test]
fn press_maps_pointer_to_value() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    let event = h.press(150.0);

    assert_eq!(h.cell.get(), 25.0);
    assert!(event.default_prevented());
    assert!(h.slider.is_dragging());
    assert_eq!(h.fill_width(), Some(Length::Percent(25.0)));
}

#[test]
fn drag_mapping_respects_step() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0).with_step(10.0));
    h.press(150.0);
    // 25 rounds up to the next multiple of ten.
    assert_eq!(h.cell.get(), 30.0);
    h.drag(147.0);
    // 23.5 rounds down.
    assert_eq!(h.cell.get(), 20.0);
}

#[test]
fn drag_continues_outside_the_track_and_clamps() {
    let mut h = harness(50.0, NumberRange::new(0.0, 100.0));
    h.press(200.0);
    assert_eq!(h.cell.get(), 50.0);

    let event = h.drag(1000.0);
    assert!(event.default_prevented());
    assert_eq!(h.cell.get(), 100.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(100.0)));

    h.drag(-40.0);
    assert_eq!(h.cell.get(), 0.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));
}

#[test]
fn non_primary_press_does_not_start_a_drag() {
    let mut h = harness(10.0, NumberRange::new(0.0, 100.0));
    let press = PointerEvent::new(EventKind::MouseDown, at(250.0)).with_buttons(Buttons::SECONDARY);
    let event = h.doc.dispatch(h.slider.track(), press);

    assert!(!event.default_prevented());
    assert_eq!(h.cell.get(), 10.0);
    assert!(!h.slider.is_dragging());
    assert_eq!(h.window_listeners(), 0);

    h.drag(200.0);
    h.release(200.0);
    assert_eq!(h.cell.get(), 10.0);
    assert!(h.finished.borrow().is_empty());
}

#[test]
fn moves_before_press_are_ignored() {
    let mut h = harness(10.0, NumberRange::new(0.0, 100.0));
    let event = h.drag(250.0);
    assert!(!event.default_prevented());
    assert_eq!(h.cell.get(), 10.0);
    h.release(250.0);
    assert!(h.finished.borrow().is_empty());
}

#[test]
fn session_fires_one_finish_with_final_value() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(110.0);
    for x in [120.0, 180.0, 240.0, 260.0] {
        h.drag(x);
    }
    assert!(h.finished.borrow().is_empty());
    h.release(260.0);

    assert_eq!(*h.finished.borrow(), vec![80.0]);
    assert!(!h.slider.is_dragging());
    assert_eq!(h.window_listeners(), 0);

    // A stray release after the session is over notifies nothing.
    h.release(260.0);
    assert_eq!(h.finished.borrow().len(), 1);
}

#[test]
fn click_without_move_updates_once_and_finishes_once() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    h.slider
        .property()
        .on_change(move |v| sink.borrow_mut().push(v));

    h.press(250.0);
    h.release(250.0);

    assert_eq!(*changes.borrow(), vec![75.0]);
    assert_eq!(*h.finished.borrow(), vec![75.0]);
}

#[test]
fn moves_after_release_do_not_affect_value() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    h.release(150.0);
    h.drag(290.0);
    assert_eq!(h.cell.get(), 25.0);
}

#[test]
fn second_press_reuses_the_session() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    h.press(200.0);
    assert_eq!(h.window_listeners(), 2);
    assert_eq!(h.cell.get(), 50.0);

    h.release(200.0);
    assert_eq!(h.window_listeners(), 0);
    assert_eq!(*h.finished.borrow(), vec![50.0]);
}

#[test]
fn zero_width_track_skips_moves() {
    let mut h = harness(40.0, NumberRange::new(0.0, 100.0));
    h.doc
        .set_bounds(h.slider.track(), Rect::new(100.0, 0.0, 100.0, 10.0))
        .unwrap();

    h.press(150.0);
    h.drag(400.0);
    assert_eq!(h.cell.get(), 40.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(40.0)));

    h.release(400.0);
    assert_eq!(*h.finished.borrow(), vec![40.0]);
}

#[test]
fn hidden_track_skips_moves() {
    let mut h = harness(40.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    assert_eq!(h.cell.get(), 25.0);

    let container = h.slider.dom_element();
    h.doc.set_hidden(container, true).unwrap();
    h.drag(250.0);
    assert_eq!(h.cell.get(), 25.0);
    h.release(250.0);
}

#[test]
fn track_offset_includes_container_position() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    let container = h.slider.dom_element();
    h.doc
        .set_bounds(container, Rect::new(50.0, 20.0, 400.0, 40.0))
        .unwrap();
    // Track now spans page x = 150..350.
    h.press(200.0);
    assert_eq!(h.cell.get(), 25.0);
}

#[test]
fn degenerate_range_renders_empty_fill() {
    let mut h = harness(5.0, NumberRange::new(5.0, 5.0));
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));
    assert_eq!(h.slider.fill_fraction(), 0.0);

    h.press(250.0);
    h.release(250.0);
    assert_eq!(h.cell.get(), 5.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));
}

#[test]
fn out_of_range_external_value_is_clamped_in_display() {
    let mut h = harness(50.0, NumberRange::new(0.0, 100.0));
    h.cell.set(180.0);
    h.slider.refresh_display(&mut h.doc);
    assert_eq!(h.fill_width(), Some(Length::Percent(100.0)));

    h.cell.set(-20.0);
    h.slider.refresh_display(&mut h.doc);
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));
}

#[test]
fn refresh_is_idempotent() {
    let mut h = harness(33.0, NumberRange::new(0.0, 100.0));
    h.slider.refresh_display(&mut h.doc);
    let first = h.fill_width();
    h.slider.refresh_display(&mut h.doc);
    assert_eq!(h.fill_width(), first);
}

#[test]
fn external_mutation_shows_after_refresh() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.cell.set(60.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));
    h.slider.refresh_display(&mut h.doc);
    assert_eq!(h.fill_width(), Some(Length::Percent(60.0)));
}

#[test]
fn programmatic_set_value_refreshes_fill() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    assert_eq!(h.slider.set_value(&mut h.doc, 75.0), 75.0);
    assert_eq!(h.fill_width(), Some(Length::Percent(75.0)));
    assert!(h.slider.is_modified());
}

#[test]
fn range_edits_refresh_fill() {
    let mut h = harness(50.0, NumberRange::new(0.0, 100.0));
    h.slider.set_max(&mut h.doc, 200.0).unwrap();
    assert_eq!(h.fill_width(), Some(Length::Percent(25.0)));
    h.slider.set_min(&mut h.doc, 50.0).unwrap();
    assert_eq!(h.fill_width(), Some(Length::Percent(0.0)));

    assert!(h.slider.set_min(&mut h.doc, 500.0).is_err());
    assert_eq!(h.slider.property().min(), 50.0);

    h.slider.set_step(&mut h.doc, 25.0).unwrap();
    h.press(150.0);
    // 50 + 150 * 0.25 = 87.5, quantized to the nearest 25.
    assert_eq!(h.cell.get(), 100.0);
}

#[test]
fn removing_track_mid_drag_still_releases_listeners() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    h.doc.remove(h.slider.track()).unwrap();

    h.drag(250.0);
    assert_eq!(h.cell.get(), 25.0);

    h.release(250.0);
    assert_eq!(h.window_listeners(), 0);
    assert_eq!(*h.finished.borrow(), vec![25.0]);
}

#[test]
fn dropping_slider_mid_drag_still_releases_listeners() {
    let Harness {
        mut doc,
        cell,
        slider,
        finished,
    } = harness(0.0, NumberRange::new(0.0, 100.0));
    doc.dispatch(slider.track(), PointerEvent::mouse_down(at(150.0)));
    drop(slider);

    doc.dispatch(EventTarget::Window, PointerEvent::mouse_drag(at(250.0)));
    assert_eq!(cell.get(), 25.0);

    doc.dispatch(EventTarget::Window, PointerEvent::mouse_up(at(250.0)));
    assert_eq!(doc.listener_count(EventTarget::Window, EventKind::MouseMove), 0);
    assert_eq!(doc.listener_count(EventTarget::Window, EventKind::MouseUp), 0);
    assert!(finished.borrow().is_empty());
}

#[test]
fn remove_releases_session_without_finishing() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    let container = h.slider.dom_element();
    let track = h.slider.track();

    let Harness {
        mut doc,
        slider,
        finished,
        ..
    } = h;
    slider.remove(&mut doc).unwrap();

    assert!(!doc.is_alive(container));
    assert!(!doc.is_alive(track));
    assert_eq!(doc.listener_count(EventTarget::Window, EventKind::MouseMove), 0);
    assert_eq!(doc.listener_count(EventTarget::Window, EventKind::MouseUp), 0);
    doc.dispatch(EventTarget::Window, PointerEvent::mouse_up(at(150.0)));
    assert!(finished.borrow().is_empty());
}

#[test]
fn finish_reads_value_fresh_from_the_property() {
    let mut h = harness(0.0, NumberRange::new(0.0, 100.0));
    h.press(150.0);
    h.cell.set(42.0);
    h.release(150.0);
    assert_eq!(*h.finished.borrow(), vec![42.0]);
}

#[test]
fn default_styles_inject_once() {
    let mut doc = Document::new();
    assert!(NumberSlider::use_default_styles(&mut doc));
    assert!(!NumberSlider::use_default_styles(&mut doc));
    assert_eq!(doc.stylesheets().count(), 1);
}

#[test]
fn two_sliders_drag_independently() {
    let mut doc = Document::new();
    let a_cell = Rc::new(Cell::new(0.0));
    let b_cell = Rc::new(Cell::new(0.0));
    let a = NumberSlider::from_target(&mut doc, a_cell.clone(), NumberRange::new(0.0, 10.0)).unwrap();
    let b = NumberSlider::from_target(&mut doc, b_cell.clone(), NumberRange::new(0.0, 10.0)).unwrap();
    doc.set_bounds(a.track(), Rect::new(0.0, 0.0, 100.0, 10.0)).unwrap();
    doc.set_bounds(b.track(), Rect::new(0.0, 0.0, 100.0, 10.0)).unwrap();
    doc.set_bounds(b.dom_element(), Rect::new(0.0, 20.0, 100.0, 30.0)).unwrap();

    doc.dispatch_at(PointerEvent::mouse_down(Point::new(30.0, 25.0)));
    doc.dispatch_at(PointerEvent::mouse_drag(Point::new(60.0, 5.0)));
    doc.dispatch_at(PointerEvent::mouse_up(Point::new(60.0, 5.0)));

    assert_eq!(a_cell.get(), 0.0);
    assert_eq!(b_cell.get(), 6.0);
    assert!(!a.is_dragging());
    assert!(!b.is_dragging());
}
