// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use humansize::{
    format_size,
    FormatSizeOptions,
    DECIMAL,
};

// Sizes below this are printed as a plain byte count.
const KILO: u64 = 1000;

// We remove the space from the humansize output so that our own output is
// sortable by `sort -h`.
/// The same as `humansize::DECIMAL` with a single decimal place, which is
/// printed even when it's zero, and `space_after_value` set to `false`.
fn size_format() -> FormatSizeOptions {
    FormatSizeOptions::from(DECIMAL)
        .decimal_places(1)
        .decimal_zeroes(1)
        .space_after_value(false)
}

/// `HumanSize` trait.
pub trait HumanSize {
    /// Return `self` as a human friendly size using decimal units.
    fn humansize(&self) -> String;
}

/// `HumanSize` trait implementation for `u64`.
impl HumanSize for u64 {
    fn humansize(&self) -> String {
        if *self < KILO {
            return format!("{}B", self);
        }

        format_size(*self, size_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_humansize() {
        let tests = vec![
            (0,                 "0B"),
            (1,                 "1B"),
            (999,               "999B"),
            (1000,              "1.0kB"),
            (1024,              "1.0kB"),
            (1_500,             "1.5kB"),
            (12_345_678,        "12.3MB"),
            (1_000_000_000,     "1.0GB"),
            (2_000_000_000_000, "2.0TB"),
            (1_500_000_000_000_000, "1.5PB"),
            (u64::MAX,          "18.4EB"),
            // Rounds up without moving to the next unit.
            (999_999,           "1000.0kB"),
        ];

        for test in tests {
            let size: u64 = test.0;
            let expected  = test.1;

            let ret = size.humansize();

            assert_eq!(ret, expected);
        }
    }
}
