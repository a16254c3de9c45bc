//! Euclidean greatest common divisor.

/// Greatest common divisor of `a` and `b`.
///
/// Total over `u64`: `gcd(x, 0) == x`, `gcd(0, y) == y` and `gcd(0, 0) == 0`.
/// The loop exits as soon as `b` reaches zero, so `a % b` never divides by
/// zero. At most ~90 iterations for 64-bit operands.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(gcd(294, 462), 42);
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_zero_operands() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(gcd(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(gcd(u64::MAX, 0), u64::MAX);
        assert_eq!(gcd(u64::MAX, 1), 1);
        // Consecutive Fibonacci numbers are the worst case for Euclid.
        assert_eq!(gcd(12_200_160_415_121_876_738, 7_540_113_804_746_346_429), 1);
        assert_eq!(gcd(1 << 63, 1 << 40), 1 << 40);
    }

    proptest! {
        /// gcd(a, b) divides both a and b unless both are zero
        #[test]
        fn divides_both(a in any::<u64>(), b in any::<u64>()) {
            let g = gcd(a, b);
            if a == 0 && b == 0 {
                prop_assert_eq!(g, 0);
            } else {
                prop_assert_eq!(a % g, 0);
                prop_assert_eq!(b % g, 0);
            }
        }

        /// gcd(a, b) == gcd(b, a)
        #[test]
        fn commutative(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn zero_is_identity(a in any::<u64>()) {
            prop_assert_eq!(gcd(a, 0), a);
            prop_assert_eq!(gcd(0, a), a);
        }

        #[test]
        fn self_gcd(a in any::<u64>()) {
            prop_assert_eq!(gcd(a, a), a);
        }

        #[test]
        fn idempotent(a in any::<u64>(), b in any::<u64>()) {
            let g = gcd(a, b);
            prop_assert_eq!(gcd(g, g), g);
        }

        /// No larger common divisor exists: the cofactors are coprime
        #[test]
        fn greatest(a in 1u64..=u64::MAX, b in 1u64..=u64::MAX) {
            let g = gcd(a, b);
            prop_assert_eq!(gcd(a / g, b / g), 1);
        }
    }
}
