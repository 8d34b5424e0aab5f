//! Key ordering. Every tree orders its keys through a [`Comparator`] which
//! defaults to [`ascending`].

use std::cmp::Ordering;
use std::fmt::Debug;

/// The outcome of comparing two keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The first key orders before the second.
    Less,
    /// The keys are the same key.
    Equal,
    /// The first key orders after the second.
    Greater,
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// A tri-state comparison function. It must be a strict total order over the keys a tree
/// holds or the trees' ordering invariants no longer hold.
pub type Comparator<K> = fn(&K, &K) -> Comparison;

/// A key that can be stored in one of the trees. Implemented for the primitive numeric types.
pub trait Key: Copy + PartialOrd + Debug {
    /// Whether this value is a usable key. Only floating point `NaN` is rejected.
    fn is_valid(&self) -> bool;
}

macro_rules! impl_integer_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                #[inline]
                fn is_valid(&self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_key {
    ($($t:ty),*) => {
        $(
            impl Key for $t {
                #[inline]
                fn is_valid(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_key!(f32, f64);

/// The default comparator: smaller numbers first.
///
/// Keys that cannot be ordered (which [`Key::is_valid`] keeps out of the trees) compare as
/// [`Comparison::Equal`].
pub fn ascending<K: Key>(a: &K, b: &K) -> Comparison {
    a.partial_cmp(b).map_or(Comparison::Equal, Comparison::from)
}

/// Larger numbers first.
pub fn descending<K: Key>(a: &K, b: &K) -> Comparison {
    ascending(b, a)
}
