//! Render errors

use segclock_core::InvalidDigitValue;

/// Errors raised while drawing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// The draw target rejected pixels
    Display(E),
    /// A counter could not be shown as two digits
    InvalidDigit(InvalidDigitValue),
}

impl<E> From<InvalidDigitValue> for RenderError<E> {
    fn from(err: InvalidDigitValue) -> Self {
        RenderError::InvalidDigit(err)
    }
}
