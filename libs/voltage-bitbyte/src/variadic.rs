//! Argument counting and positional selection
//!
//! `arg_count!` counts a literal argument list at compile time; `arg_at`
//! selects one value from a slice by 1-based position.

use tracing::debug;

use crate::error::{BitByteError, Result};

/// Count comma-separated expressions without evaluating them
///
/// Expands to a `usize` constant expression, usable in `const` items and
/// array lengths. A trailing comma is allowed; an empty list counts 0.
///
/// # Example
/// ```
/// use voltage_bitbyte::arg_count;
/// assert_eq!(arg_count!(a, b, c), 3);
/// const N: usize = arg_count!(1, 2, 3, 4);
/// let table = [0u8; N];
/// assert_eq!(table.len(), 4);
/// ```
#[macro_export]
macro_rules! arg_count {
    () => {
        0usize
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        1usize + $crate::arg_count!($($tail),*)
    };
}

/// Select the argument at 1-based `position`
///
/// # Example
/// ```
/// use voltage_bitbyte::variadic::arg_at;
/// assert_eq!(arg_at(3, &['A', 'B', 'C', 'D', 'E']), Ok(&'C'));
/// ```
pub fn arg_at<T>(position: usize, args: &[T]) -> Result<&T> {
    position
        .checked_sub(1)
        .and_then(|index| args.get(index))
        .ok_or_else(|| {
            debug!(position, count = args.len(), "Argument position out of range");
            BitByteError::ArgumentPosition {
                position,
                count: args.len(),
            }
        })
}
