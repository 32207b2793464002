//! Numeric keys for range-based binning
//!
//! Any value that can be converted to an `f64` can serve as the key of a
//! numeric binning. Date keys are represented as milliseconds since the
//! epoch and therefore are numeric keys as well.

use num_traits::ToPrimitive;

/// A value that can be placed on the real line for numeric binning
pub trait NumericKey {
    /// Convert the key into a double. Keys that cannot be represented
    /// map to `NaN`, which no numeric binning classifies.
    fn to_key(&self) -> f64;
}

macro_rules! impl_numeric_key {
    ($($t:ty),*) => {
        $(
            impl NumericKey for $t {
                #[inline]
                fn to_key(&self) -> f64 {
                    ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
                }
            }
        )*
    };
}

impl_numeric_key!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<K: NumericKey + ?Sized> NumericKey for &K {
    #[inline]
    fn to_key(&self) -> f64 {
        (**self).to_key()
    }
}

impl NumericKey for chrono::DateTime<chrono::Utc> {
    #[inline]
    fn to_key(&self) -> f64 {
        self.timestamp_millis() as f64
    }
}
