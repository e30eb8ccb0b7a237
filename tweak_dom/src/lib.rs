// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tweak DOM: a headless element document for controller widgets.
//!
//! Controllers in this workspace are written against the handful of DOM
//! primitives they actually need, so they can be driven by a browser bridge,
//! a native toolkit, or a test harness alike:
//!
//! - an element tree with generational [`ElementId`] handles,
//! - class lists and a small inline style ([`InlineStyle`]),
//! - parent-relative bounds written by the host's layout pass, read back as
//!   page [`offset`](Document::offset) and rendered [`width`](Document::width),
//! - pointer listeners bound to elements or to the [`EventTarget::Window`],
//!   with unique [`ListenerId`] handles for exact unbinding,
//! - bubbling [`dispatch`](Document::dispatch) and hit-testing
//!   [`dispatch_at`](Document::dispatch_at),
//! - inject-once stylesheets.
//!
//! This crate does not lay anything out; it stores whatever geometry the
//! host writes.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use tweak_dom::{Document, EventKind, EventTarget, PointerEvent};
//!
//! let mut doc = Document::new();
//! let panel = doc.create_element();
//! let button = doc.create_element();
//! doc.append_child(panel, button).unwrap();
//! doc.set_bounds(panel, Rect::new(10.0, 10.0, 210.0, 110.0)).unwrap();
//! doc.set_bounds(button, Rect::new(5.0, 5.0, 55.0, 25.0)).unwrap();
//!
//! assert_eq!(doc.offset(button), Some(Point::new(15.0, 15.0)));
//! assert_eq!(doc.width(button), 50.0);
//!
//! // Presses on the button bubble up to the window.
//! let presses = Rc::new(Cell::new(0));
//! let counter = presses.clone();
//! doc.bind(EventTarget::Window, EventKind::MouseDown, move |_, _| {
//!     counter.set(counter.get() + 1);
//! })
//! .unwrap();
//!
//! doc.dispatch_at(PointerEvent::mouse_down(Point::new(20.0, 20.0)));
//! assert_eq!(presses.get(), 1);
//!
//! // Stylesheets are injected once.
//! assert!(doc.inject_stylesheet(".button { color: red; }"));
//! assert!(!doc.inject_stylesheet(".button { color: red; }"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile Kurbo against the standard library.
//! - `libm`: compile Kurbo with `libm` float functions, for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod document;
mod error;
mod event;
mod types;

pub use document::Document;
pub use error::DomError;
pub use event::{Handler, PointerEvent};
pub use types::{Buttons, ElementId, EventKind, EventTarget, InlineStyle, Length, ListenerId};
