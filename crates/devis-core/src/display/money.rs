//! Currency formatting utilities.

use std::fmt;

/// Wrapper for displaying a cost amount as dollars.
///
/// Costs stay unrounded inside the calculator; rounding to whole dollars
/// and inserting thousands separators happens here, at display time only.
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        let negative = rounded < 0.0;
        let digits = format!("{}", rounded.abs() as u64);

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if negative {
            write!(f, "-${grouped}")
        } else {
            write!(f, "${grouped}")
        }
    }
}
