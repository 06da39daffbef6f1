//! In-place index fills
//!
//! Every function here writes `start + i` into position `i`. The length is
//! read once when the call starts. The range check happens before the first
//! write, so a failed fill leaves the buffer untouched.

use std::fmt;

use tracing::{debug, warn};

use crate::core::error::{Error, Result};
use crate::core::types::ElementType;

/// Primitive integer types a sequence can be built from
pub trait SequenceValue: Copy + fmt::Display + fmt::Debug + PartialEq + 'static {
    /// Value written at index 0 by [`fill_sequence`]
    const ZERO: Self;

    /// Runtime tag for this type
    const ELEMENT_TYPE: ElementType;

    /// `start + index`, or `None` when the result is out of range
    fn offset(start: Self, index: usize) -> Option<Self>;

    /// `self + 1`, wrapping at the type's maximum
    fn wrapping_succ(self) -> Self;
}

macro_rules! impl_sequence_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl SequenceValue for $ty {
                const ZERO: Self = 0;
                const ELEMENT_TYPE: ElementType = ElementType::$variant;

                #[inline]
                fn offset(start: Self, index: usize) -> Option<Self> {
                    // i128 holds every sum of a 64-bit start and a usize index
                    <$ty>::try_from(start as i128 + index as i128).ok()
                }

                #[inline]
                fn wrapping_succ(self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )*
    };
}

impl_sequence_value!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

/// Fill `buf` with `0, 1, 2, …, buf.len() - 1`.
///
/// Returns [`Error::Overflow`] without touching `buf` when `buf.len() - 1`
/// does not fit in `T`.
pub fn fill_sequence<T: SequenceValue>(buf: &mut [T]) -> Result<()> {
    fill_from(buf, T::ZERO)
}

/// Fill `buf` with `start, start + 1, …, start + buf.len() - 1`.
pub fn fill_from<T: SequenceValue>(buf: &mut [T], start: T) -> Result<()> {
    let length = buf.len();
    if length == 0 {
        return Ok(());
    }

    if T::offset(start, length - 1).is_none() {
        warn!(length, element_type = %T::ELEMENT_TYPE, %start, "sequence does not fit element type");
        return Err(Error::Overflow {
            element_type: T::ELEMENT_TYPE,
            start: start.to_string(),
            length,
        });
    }

    debug!(length, element_type = %T::ELEMENT_TYPE, %start, "filling sequence");

    // The last value fits, so every value before it does too. Only the
    // successor of the final element can wrap, and it is never stored.
    let mut next = start;
    for slot in buf.iter_mut() {
        *slot = next;
        next = next.wrapping_succ();
    }

    Ok(())
}

/// Allocate a vector of `len` elements holding `0..len`.
pub fn sequence<T: SequenceValue>(len: usize) -> Result<Vec<T>> {
    sequence_from(len, T::ZERO)
}

/// Allocate a vector of `len` elements holding `start..start + len`.
pub fn sequence_from<T: SequenceValue>(len: usize, start: T) -> Result<Vec<T>> {
    let mut values = vec![T::ZERO; len];
    fill_from(&mut values, start)?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fill_sequence_writes_indices() {
        let mut values = vec![-7i32; 5];
        fill_sequence(&mut values).unwrap();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_sequence_empty_is_noop() {
        let mut values: Vec<i32> = Vec::new();
        fill_sequence(&mut values).unwrap();
        assert!(values.is_empty());

        let mut bytes: [u8; 0] = [];
        fill_from(&mut bytes, u8::MAX).unwrap();
    }

    #[test]
    fn test_fill_sequence_uses_length_at_call_time() {
        let mut values = vec![9u16; 3];
        fill_sequence(&mut values).unwrap();
        values.push(9);
        assert_eq!(values, vec![0, 1, 2, 9]);

        fill_sequence(&mut values).unwrap();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fill_array_and_subslice() {
        let mut arr = [100i64; 6];
        fill_sequence(&mut arr[2..]).unwrap();
        assert_eq!(arr, [100, 100, 0, 1, 2, 3]);
    }

    #[test]
    fn test_fill_from_negative_start() {
        let mut values = [0i8; 4];
        fill_from(&mut values, -2).unwrap();
        assert_eq!(values, [-2, -1, 0, 1]);
    }

    #[test]
    fn test_narrow_types_at_their_limits() {
        let mut exact = vec![0i8; 128];
        fill_sequence(&mut exact).unwrap();
        assert_eq!(exact[127], i8::MAX);

        let mut bytes = vec![0u8; 256];
        fill_sequence(&mut bytes).unwrap();
        assert_eq!(bytes[255], u8::MAX);

        let mut wide = vec![0i8; 256];
        fill_from(&mut wide, i8::MIN).unwrap();
        assert_eq!(wide[0], i8::MIN);
        assert_eq!(wide[255], i8::MAX);
    }

    #[test]
    fn test_overflow_leaves_buffer_untouched() {
        let mut values = vec![42i8; 129];
        let err = fill_sequence(&mut values).unwrap_err();
        assert!(matches!(
            err,
            Error::Overflow { element_type: ElementType::I8, length: 129, .. }
        ));
        assert!(values.iter().all(|&v| v == 42));

        let mut bytes = vec![7u8; 2];
        assert!(fill_from(&mut bytes, u8::MAX).is_err());
        assert_eq!(bytes, vec![7, 7]);
    }

    #[test]
    fn test_fill_ends_exactly_at_max() {
        let mut values = [0u32; 3];
        fill_from(&mut values, u32::MAX - 2).unwrap();
        assert_eq!(values, [u32::MAX - 2, u32::MAX - 1, u32::MAX]);

        let mut signed = [0i64; 2];
        fill_from(&mut signed, i64::MAX - 1).unwrap();
        assert_eq!(signed, [i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_sequence_allocates_and_fills() {
        assert_eq!(sequence::<usize>(4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(sequence_from::<i16>(3, 10).unwrap(), vec![10, 11, 12]);
        assert!(sequence::<u8>(0).unwrap().is_empty());
        assert!(sequence::<u8>(300).is_err());
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(<i8 as SequenceValue>::offset(-100, 150), Some(50));
        assert_eq!(<i8 as SequenceValue>::offset(0, 128), None);
        assert_eq!(<u64 as SequenceValue>::offset(u64::MAX, 0), Some(u64::MAX));
        assert_eq!(<u64 as SequenceValue>::offset(u64::MAX, 1), None);
    }

    proptest! {
        #[test]
        fn prop_every_element_equals_its_index(len in 0usize..2048) {
            let mut values = vec![-1i32; len];
            fill_sequence(&mut values).unwrap();
            prop_assert_eq!(values.len(), len);
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(*v as usize, i);
            }
        }

        #[test]
        fn prop_fill_from_is_start_plus_index(start in -1_000_000i64..1_000_000, len in 0usize..512) {
            let values = sequence_from(len, start).unwrap();
            for (i, v) in values.iter().enumerate() {
                prop_assert_eq!(*v, start + i as i64);
            }
        }

        #[test]
        fn prop_u8_fill_succeeds_iff_last_value_fits(start in any::<u8>(), len in 0usize..300) {
            let mut values = vec![0u8; len];
            let fits = len == 0 || start as usize + len - 1 <= u8::MAX as usize;
            prop_assert_eq!(fill_from(&mut values, start).is_ok(), fits);
            if !fits {
                prop_assert!(values.iter().all(|&v| v == 0));
            }
        }
    }
}
