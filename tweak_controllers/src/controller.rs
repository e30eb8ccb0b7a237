// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities shared by controllers.

use alloc::rc::Rc;

use tweak_dom::Document;
use tweak_property::NumberProperty;

/// Something that mirrors a value into the document.
pub trait DisplayRefreshable {
    /// Brings the controller's elements in line with the current value.
    ///
    /// Safe to call at any time and idempotent: with an unchanged value, a
    /// second call leaves the document exactly as the first one did.
    fn refresh_display(&self, doc: &mut Document);
}

/// A controller bound to a numeric property.
pub trait ValueBound: DisplayRefreshable {
    /// Returns the bound property.
    fn property(&self) -> &Rc<NumberProperty>;

    /// Reads the current value.
    fn value(&self) -> f64 {
        self.property().value()
    }

    /// Writes `value` through the property, then refreshes the display.
    ///
    /// Returns the value the property accepted.
    fn set_value(&self, doc: &mut Document, value: f64) -> f64 {
        let accepted = self.property().set_value(value);
        self.refresh_display(doc);
        accepted
    }

    /// Returns `true` if the value differs from the property's initial value.
    fn is_modified(&self) -> bool {
        self.property().is_modified()
    }
}
