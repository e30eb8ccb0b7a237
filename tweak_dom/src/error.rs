// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::types::ElementId;

/// Errors raised by [`Document`](crate::Document) tree and listener operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DomError {
    /// The element was removed, or its slot has since been reused.
    #[error("element {0:?} is not alive")]
    StaleElement(ElementId),
    /// Appending would make an element its own ancestor.
    #[error("appending {child:?} under {parent:?} would create a cycle")]
    WouldCycle {
        /// The requested parent.
        parent: ElementId,
        /// The element being appended.
        child: ElementId,
    },
}
