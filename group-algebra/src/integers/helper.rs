use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Computes the non-negative gcd of all `values`.
///
/// The subgroup of ℤ generated by `values` is `dℤ` for the returned `d`. An empty
/// input or an input of zeros yields 0, the generator of the trivial subgroup.
pub fn gcd_all<'a, I>(values: I) -> BigInt
where
    I: IntoIterator<Item = &'a BigInt>,
{
    values
        .into_iter()
        .fold(BigInt::zero(), |acc, value| acc.gcd(value))
}

/// Whether `value` lies in `dℤ`.
///
/// `0ℤ` is the trivial subgroup, so only 0 is a multiple of 0.
pub fn is_multiple(value: &BigInt, d: &BigInt) -> bool {
    if d.is_zero() {
        return value.is_zero();
    }

    (value % d).is_zero()
}
