// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use tweak_dom::DomError;
use tweak_property::PropertyError;

/// Errors raised while building or reconfiguring a controller.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ControllerError {
    /// The property rejected its configuration.
    #[error(transparent)]
    Property(#[from] PropertyError),
    /// A document operation failed.
    #[error(transparent)]
    Dom(#[from] DomError),
}
