// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The base numeric controller.

use alloc::rc::Rc;
use alloc::string::{String, ToString};

use tweak_dom::{Document, DomError, ElementId};
use tweak_property::NumberProperty;

use crate::controller::{DisplayRefreshable, ValueBound};
use crate::style::{CONTROLLER_CLASS, READOUT_CLASS};

/// A controller for a [`NumberProperty`], owning a container element.
///
/// On its own it renders nothing but an optional text readout; richer
/// controllers such as [`NumberSlider`](crate::NumberSlider) wrap it and
/// decorate its [`refresh_display`](DisplayRefreshable::refresh_display).
#[derive(Clone, Debug)]
pub struct NumberController {
    property: Rc<NumberProperty>,
    dom_element: ElementId,
    readout: Option<ElementId>,
}

impl NumberController {
    /// Creates the container element for `property`.
    ///
    /// The container is detached; insert [`dom_element`](Self::dom_element)
    /// into a panel to show it.
    pub fn new(doc: &mut Document, property: Rc<NumberProperty>) -> Result<Self, DomError> {
        let dom_element = doc.create_element();
        doc.add_class(dom_element, CONTROLLER_CLASS)?;
        Ok(Self {
            property,
            dom_element,
            readout: None,
        })
    }

    /// Adds a text readout showing the value at the property's precision.
    pub fn with_readout(mut self, doc: &mut Document) -> Result<Self, DomError> {
        let readout = doc.create_element();
        doc.add_class(readout, READOUT_CLASS)?;
        doc.append_child(self.dom_element, readout)?;
        self.readout = Some(readout);
        self.refresh_display(doc);
        Ok(self)
    }

    /// Returns the container element.
    #[must_use]
    pub fn dom_element(&self) -> ElementId {
        self.dom_element
    }

    /// Returns the readout element, if one was added.
    #[must_use]
    pub fn readout(&self) -> Option<ElementId> {
        self.readout
    }

    /// Formats the current value the way the readout shows it.
    #[must_use]
    pub fn readout_text(&self) -> String {
        self.property.display_value().to_string()
    }
}

impl DisplayRefreshable for NumberController {
    fn refresh_display(&self, doc: &mut Document) {
        let Some(readout) = self.readout else {
            return;
        };
        if let Err(err) = doc.set_text(readout, self.readout_text()) {
            log::debug!("skipping readout refresh: {err}");
        }
    }
}

impl ValueBound for NumberController {
    fn property(&self) -> &Rc<NumberProperty> {
        &self.property
    }
}
