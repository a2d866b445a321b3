//! Small predicates on primitive integers.

use std::cmp::Ordering;

use num_traits::PrimInt;

/// Whether `x` is divisible by two. Works for negative values of signed types.
pub fn is_even<T: PrimInt>(x: T) -> bool {
    x & T::one() == T::zero()
}

pub fn is_odd<T: PrimInt>(x: T) -> bool {
    !is_even(x)
}

/// How `x` compares to zero.
pub fn sign<T: PrimInt>(x: T) -> Ordering {
    x.cmp(&T::zero())
}
