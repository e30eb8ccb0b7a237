// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tweak Property: numeric property bindings for controllers.
//!
//! A [`NumberProperty`] binds one numeric field of some host object (a
//! [`PropertyTarget`]) to a [`NumberRange`]. It owns the rules that every
//! numeric controller shares:
//!
//! - values written through [`NumberProperty::set_value`] are clamped to
//!   `[min, max]` and quantized to the step,
//! - reads always go back to the target, so external mutation is visible,
//! - change and finish-change callbacks are registered once and invoked with
//!   the accepted value.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tweak_property::{NumberProperty, NumberRange};
//!
//! let speed = Rc::new(Cell::new(10.0_f64));
//! let property = NumberProperty::new(speed.clone(), NumberRange::new(0.0, 100.0).with_step(5.0))
//!     .unwrap();
//!
//! // Out-of-range writes are clamped.
//! assert_eq!(property.set_value(140.0), 100.0);
//! // Off-step writes are rounded to the nearest step.
//! assert_eq!(property.set_value(42.0), 40.0);
//! assert_eq!(speed.get(), 40.0);
//!
//! // External mutation is visible on the next read.
//! speed.set(15.0);
//! assert_eq!(property.value(), 15.0);
//! ```
//!
//! ## Binding struct fields
//!
//! [`Field`] adapts a field of a shared `Rc<RefCell<T>>` object:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use tweak_property::{Field, NumberProperty, NumberRange};
//!
//! #[derive(Debug)]
//! struct Particle { radius: f32 }
//!
//! let particle = Rc::new(RefCell::new(Particle { radius: 2.0 }));
//! let field = Field::new(
//!     particle.clone(),
//!     |p| f64::from(p.radius),
//!     |p, v| p.radius = v as f32,
//! )
//! .named("radius");
//!
//! let property = NumberProperty::new(field, NumberRange::new(0.0, 8.0)).unwrap();
//! property.set_value(4.5);
//! assert_eq!(particle.borrow().radius, 4.5);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` float functions instead, for `no_std` targets.
//! - `serde`: derive `Serialize`/`Deserialize` for [`NumberRange`].
//!
//! This crate is `no_std` compatible (with `alloc`); enable either `std` or `libm`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod number;
mod target;

pub use error::PropertyError;
pub use number::{NumberProperty, NumberRange, ValueCallback};
pub use target::{Field, PropertyTarget};
