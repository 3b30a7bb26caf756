use crate::domain::model::DigitalRoot;

const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

/// Reduces `n` to a single digit by repeated digit summing, except that a
/// value hitting 11, 22 or 33 at any step is kept as-is. The master check
/// runs before the loop and again after every summation, so inputs like 29
/// stop at 11 rather than collapsing to 2.
pub fn reduce(n: u64) -> DigitalRoot {
    let mut current = n;

    if MASTER_NUMBERS.contains(&current) {
        return DigitalRoot::new(current);
    }

    while current >= 10 {
        current = digit_sum(current);
        if MASTER_NUMBERS.contains(&current) {
            return DigitalRoot::new(current);
        }
    }

    DigitalRoot::new(current)
}

fn digit_sum(mut n: u64) -> u64 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_numbers_are_idempotent() {
        assert_eq!(reduce(11).value(), 11);
        assert_eq!(reduce(22).value(), 22);
        assert_eq!(reduce(33).value(), 33);
    }

    #[test]
    fn test_digit_sum_path_to_master_number() {
        // 29 -> 2 + 9 = 11, preserved instead of reducing to 2
        assert_eq!(reduce(29).value(), 11);
        assert_eq!(reduce(38).value(), 11);
        assert_eq!(reduce(292).value(), 4);
        assert!(reduce(29).is_master());
    }

    #[test]
    fn test_normal_reduction() {
        // 49 -> 13 -> 4
        assert_eq!(reduce(49).value(), 4);
        assert_eq!(reduce(0).value(), 0);
        assert_eq!(reduce(9).value(), 9);
        assert_eq!(reduce(10).value(), 1);
    }

    #[test]
    fn test_large_inputs() {
        // Sums from very long names must not overflow or misbehave.
        assert_eq!(reduce(999_999_999_999).value(), reduce(9 * 12).value());
        assert_eq!(reduce(u64::MAX).value(), reduce(digit_sum(u64::MAX)).value());
    }
}
