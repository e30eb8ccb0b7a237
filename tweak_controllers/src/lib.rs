// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tweak Controllers: widgets that edit one property of a host object.
//!
//! Controllers are built from capabilities rather than a class hierarchy:
//!
//! - [`DisplayRefreshable`]: mirror the current value into the document.
//! - [`ValueBound`]: read and write a shared [`NumberProperty`](tweak_property::NumberProperty),
//!   refreshing after every write.
//!
//! [`NumberController`] is the base numeric controller: a container element
//! and an optional text readout. [`NumberSlider`] wraps one and adds a
//! draggable track and fill; its refresh redraws the fill and then delegates
//! to the wrapped controller, so the readout stays in step with the bar.
//!
//! ## Slider with a readout
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use tweak_controllers::{NumberController, NumberSlider, ValueBound};
//! use tweak_dom::{Document, EventTarget, Length, PointerEvent};
//! use tweak_property::{NumberProperty, NumberRange};
//!
//! let mut doc = Document::new();
//! NumberSlider::use_default_styles(&mut doc);
//!
//! let gain = Rc::new(Cell::new(2.0_f64));
//! let property = Rc::new(
//!     NumberProperty::new(gain.clone(), NumberRange::new(0.0, 10.0).with_step(0.5)).unwrap(),
//! );
//!
//! let finished = Rc::new(Cell::new(None));
//! let sink = finished.clone();
//! property.on_finish_change(move |v| sink.set(Some(v)));
//!
//! let controller = NumberController::new(&mut doc, property)
//!     .unwrap()
//!     .with_readout(&mut doc)
//!     .unwrap();
//! let slider = NumberSlider::new(&mut doc, controller).unwrap();
//! assert_eq!(doc.style(slider.fill()).unwrap().width, Some(Length::Percent(20.0)));
//!
//! // Host layout: the track spans x = 0..200.
//! doc.set_bounds(slider.track(), Rect::new(0.0, 0.0, 200.0, 12.0)).unwrap();
//!
//! doc.dispatch(slider.track(), PointerEvent::mouse_down(Point::new(150.0, 6.0)));
//! doc.dispatch(EventTarget::Window, PointerEvent::mouse_up(Point::new(150.0, 6.0)));
//!
//! assert_eq!(slider.value(), 7.5);
//! assert_eq!(finished.get(), Some(7.5));
//! let readout = slider.controller().readout().unwrap();
//! assert_eq!(doc.text(readout), Some("7.5"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `tweak_dom` and `tweak_property`.
//! - `libm`: forwarded likewise, for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod number;
mod slider;
mod style;

pub use controller::{DisplayRefreshable, ValueBound};
pub use error::ControllerError;
pub use number::NumberController;
pub use slider::NumberSlider;
pub use style::{CONTROLLER_CLASS, DEFAULT_STYLESHEET, FILL_CLASS, READOUT_CLASS, TRACK_CLASS};
