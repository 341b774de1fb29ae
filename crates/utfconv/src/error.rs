use thiserror::Error;

/// Returned by the `_into` conversions when the destination cannot hold the
/// converted output. Nothing is written to the destination in that case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("output buffer too small: need {required} units, have {available}")]
pub struct BufferTooSmall {
    /// Units the conversion needs, as reported by the length pass.
    pub required: usize,
    /// Length of the destination slice.
    pub available: usize,
}

impl BufferTooSmall {
    /// Checks that `available` can hold `required` units.
    pub(crate) fn check(required: usize, available: usize) -> Result<(), Self> {
        if required > available {
            Err(Self {
                required,
                available,
            })
        } else {
            Ok(())
        }
    }
}
