// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Targets: where a numeric property's value actually lives.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

/// A readable and writable numeric slot on some host object.
///
/// Implementations use interior mutability: a controller only ever holds a
/// shared reference to its target, and the host keeps its own handle so it
/// can mutate the value behind the controller's back.
pub trait PropertyTarget {
    /// Reads the current value.
    fn get(&self) -> f64;

    /// Writes a new value.
    fn set(&self, value: f64);
}

impl PropertyTarget for Cell<f64> {
    fn get(&self) -> f64 {
        Self::get(self)
    }

    fn set(&self, value: f64) {
        Self::set(self, value);
    }
}

impl<T: PropertyTarget + ?Sized> PropertyTarget for Rc<T> {
    fn get(&self) -> f64 {
        (**self).get()
    }

    fn set(&self, value: f64) {
        (**self).set(value);
    }
}

/// One numeric field of a shared object, accessed through plain function pointers.
///
/// The object is borrowed only for the duration of a single read or write.
pub struct Field<T> {
    object: Rc<RefCell<T>>,
    name: Option<&'static str>,
    getter: fn(&T) -> f64,
    setter: fn(&mut T, f64),
}

impl<T> Field<T> {
    /// Creates a field binding from a getter/setter pair.
    #[must_use]
    pub fn new(object: Rc<RefCell<T>>, getter: fn(&T) -> f64, setter: fn(&mut T, f64)) -> Self {
        Self {
            object,
            name: None,
            getter,
            setter,
        }
    }

    /// Attaches a display name, typically the field's identifier.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Returns the display name, if one was attached.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns the shared object this field reads from.
    #[must_use]
    pub fn object(&self) -> &Rc<RefCell<T>> {
        &self.object
    }
}

impl<T> PropertyTarget for Field<T> {
    fn get(&self) -> f64 {
        (self.getter)(&self.object.borrow())
    }

    fn set(&self, value: f64) {
        (self.setter)(&mut self.object.borrow_mut(), value);
    }
}

// Manual Debug impl since the accessors aren't Debug
impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.get())
            .finish_non_exhaustive()
    }
}
