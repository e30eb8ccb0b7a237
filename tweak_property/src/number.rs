// Copyright 2025 the Tweak Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The numeric property model shared by every numeric controller.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::ToString;
use core::cell::{Cell, RefCell};
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `log10`, `powf`, `powi`

use crate::error::PropertyError;
use crate::target::PropertyTarget;

/// Callback invoked with a property value.
///
/// Callbacks are shared so the property can release its own borrow before
/// calling out; a callback may therefore read the property again.
pub type ValueCallback = Rc<dyn Fn(f64)>;

/// Allowed range and increment for a numeric property.
///
/// `min == max` is a legal, degenerate configuration.
///
/// # Example
///
/// ```rust
/// use tweak_property::NumberRange;
///
/// let range = NumberRange::new(-1.0, 1.0).with_step(0.25);
/// assert!(range.validate().is_ok());
/// assert_eq!(range.span(), 2.0);
/// assert_eq!(range.clamp(3.0), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Increment values are quantized to, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub step: Option<f64>,
}

impl NumberRange {
    /// Creates a range without a step.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    /// Returns this range with the given step.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Checks that the bounds are finite and ordered and the step is positive.
    pub fn validate(&self) -> Result<(), PropertyError> {
        for bound in [self.min, self.max] {
            if !bound.is_finite() {
                return Err(PropertyError::NonFiniteBound(bound));
            }
        }
        if self.min > self.max {
            return Err(PropertyError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        if let Some(step) = self.step {
            if !step.is_finite() || step <= 0.0 {
                return Err(PropertyError::InvalidStep(step));
            }
        }
        Ok(())
    }

    /// Returns `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Clamps and then quantizes `value` to the step.
    ///
    /// Quantization rounds halves toward positive infinity and the result is
    /// clamped again so it never leaves the range.
    #[must_use]
    pub fn constrain(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        match self.step {
            Some(step) if clamped % step != 0.0 => self.clamp(round_half_up(clamped / step) * step),
            _ => clamped,
        }
    }
}

/// A numeric field of some object, constrained to a [`NumberRange`].
///
/// All methods take `&self`; share a property between a controller and its
/// host with `Rc<NumberProperty>`.
pub struct NumberProperty {
    target: Box<dyn PropertyTarget>,
    range: Cell<NumberRange>,
    initial_value: f64,
    implied_step: Cell<f64>,
    on_change: RefCell<Option<ValueCallback>>,
    on_finish_change: RefCell<Option<ValueCallback>>,
}

impl NumberProperty {
    /// Binds `target` to `range`.
    ///
    /// The target's current value becomes the initial value; it is not
    /// rewritten, so an out-of-range initial value stays until the first write.
    pub fn new(
        target: impl PropertyTarget + 'static,
        range: NumberRange,
    ) -> Result<Self, PropertyError> {
        range.validate()?;
        let initial_value = target.get();
        if !initial_value.is_finite() {
            return Err(PropertyError::NonFiniteValue(initial_value));
        }
        let implied_step = range
            .step
            .unwrap_or_else(|| implied_step_for(initial_value));
        Ok(Self {
            target: Box::new(target),
            range: Cell::new(range),
            initial_value,
            implied_step: Cell::new(implied_step),
            on_change: RefCell::new(None),
            on_finish_change: RefCell::new(None),
        })
    }

    /// Reads the current value from the target.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.target.get()
    }

    /// Returns the value the target held when the property was created.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Returns `true` if the current value differs from the initial value.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value() != self.initial_value
    }

    /// Clamps, quantizes, and writes `value`, then notifies the change callback.
    ///
    /// Returns the accepted value. Non-finite input is ignored and the
    /// current value is returned unchanged.
    pub fn set_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            log::warn!("ignoring non-finite property value {value}");
            return self.value();
        }
        let accepted = self.range.get().constrain(value);
        self.target.set(accepted);
        let callback = self.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback(accepted);
        }
        accepted
    }

    /// Returns the current range.
    #[must_use]
    pub fn range(&self) -> NumberRange {
        self.range.get()
    }

    /// Returns the minimum.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.range.get().min
    }

    /// Returns the maximum.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.range.get().max
    }

    /// Returns the explicit step, if any.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.range.get().step
    }

    /// Replaces the minimum.
    pub fn set_min(&self, min: f64) -> Result<(), PropertyError> {
        self.set_range(NumberRange {
            min,
            ..self.range.get()
        })
    }

    /// Replaces the maximum.
    pub fn set_max(&self, max: f64) -> Result<(), PropertyError> {
        self.set_range(NumberRange {
            max,
            ..self.range.get()
        })
    }

    /// Replaces the step; it also becomes the implied step.
    pub fn set_step(&self, step: f64) -> Result<(), PropertyError> {
        self.set_range(NumberRange {
            step: Some(step),
            ..self.range.get()
        })?;
        self.implied_step.set(step);
        Ok(())
    }

    /// Replaces the whole range after validating it.
    ///
    /// The stored value is left alone; write it again to re-constrain.
    pub fn set_range(&self, range: NumberRange) -> Result<(), PropertyError> {
        range.validate()?;
        if let Some(step) = range.step {
            self.implied_step.set(step);
        }
        self.range.set(range);
        Ok(())
    }

    /// Returns the step used for display precision.
    ///
    /// This is the explicit step when there is one, otherwise a tenth of the
    /// initial value's order of magnitude (or `1` for an initial value of zero).
    #[must_use]
    pub fn implied_step(&self) -> f64 {
        self.implied_step.get()
    }

    /// Returns the number of decimal digits in the implied step.
    #[must_use]
    pub fn precision(&self) -> u32 {
        decimal_digits(self.implied_step.get())
    }

    /// Returns the current value rounded to [`precision`](Self::precision) digits.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        round_to_decimals(self.value(), self.precision())
    }

    /// Registers the callback invoked after every accepted write.
    ///
    /// Replaces any previously registered change callback.
    pub fn on_change(&self, callback: impl Fn(f64) + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(callback));
    }

    /// Registers the callback invoked when an interaction finishes.
    ///
    /// Replaces any previously registered finish callback.
    pub fn on_finish_change(&self, callback: impl Fn(f64) + 'static) {
        *self.on_finish_change.borrow_mut() = Some(Rc::new(callback));
    }

    /// Returns `true` if a finish callback is registered.
    #[must_use]
    pub fn has_finish_callback(&self) -> bool {
        self.on_finish_change.borrow().is_some()
    }

    /// Invokes the finish callback with a freshly read value.
    ///
    /// Returns `true` if a callback was registered and invoked.
    pub fn finish_change(&self) -> bool {
        let callback = self.on_finish_change.borrow().clone();
        match callback {
            Some(callback) => {
                callback(self.value());
                true
            }
            None => false,
        }
    }
}

// Manual Debug impl since callbacks aren't Debug
impl fmt::Debug for NumberProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberProperty")
            .field("value", &self.value())
            .field("range", &self.range.get())
            .field("initial_value", &self.initial_value)
            .field("implied_step", &self.implied_step.get())
            .field("has_change_callback", &self.on_change.borrow().is_some())
            .field(
                "has_finish_callback",
                &self.on_finish_change.borrow().is_some(),
            )
            .finish_non_exhaustive()
    }
}

fn implied_step_for(initial: f64) -> f64 {
    if initial == 0.0 {
        1.0
    } else {
        10_f64.powf(initial.abs().log10().floor()) / 10.0
    }
}

/// Rounds to the nearest integer with halves going toward +∞.
///
/// `value + 0.5` is not exact in floating point, so the fraction is compared
/// against the floor instead.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

fn decimal_digits(value: f64) -> u32 {
    let text = value.to_string();
    text.split_once('.')
        .map_or(0, |(_, fraction)| u32::try_from(fraction.len()).unwrap_or(u32::MAX))
}

fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    round_half_up(value * scale) / scale
}
