// src/money.rs

//! Currency amounts are carried as integer cents end to end, so line totals
//! (`price_cents * quantity`) and cart sums are exact. The only rounding
//! point is the admin boundary, where dollar inputs become cents.

use crate::errors::{AppError, Result};

/// Converts a dollar amount (e.g. `49.99`) to integer cents, rounding
/// half-up on sub-cent input. Rejects negative and non-finite amounts.
pub fn dollars_to_cents(amount: f64) -> Result<i32> {
  if !amount.is_finite() || amount < 0.0 {
    return Err(AppError::Validation(
      "Price must be a non-negative amount.".to_string(),
    ));
  }
  let cents = (amount * 100.0).round();
  if cents > i32::MAX as f64 {
    return Err(AppError::Validation("Price is out of range.".to_string()));
  }
  Ok(cents as i32)
}

/// Renders a cent total as a 2-fraction-digit decimal string, e.g. `12497`
/// becomes `"124.97"`.
pub fn format_cents(total_cents: i64) -> String {
  format!("{}.{:02}", total_cents / 100, total_cents % 100)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converts_whole_and_fractional_dollars() {
    assert_eq!(dollars_to_cents(0.0).unwrap(), 0);
    assert_eq!(dollars_to_cents(10.0).unwrap(), 1000);
    assert_eq!(dollars_to_cents(49.99).unwrap(), 4999);
    assert_eq!(dollars_to_cents(24.99).unwrap(), 2499);
  }

  #[test]
  fn rounds_sub_cent_input_half_up() {
    assert_eq!(dollars_to_cents(19.999).unwrap(), 2000);
    assert_eq!(dollars_to_cents(0.004).unwrap(), 0);
  }

  #[test]
  fn rejects_negative_and_non_finite_amounts() {
    assert!(matches!(dollars_to_cents(-0.01), Err(AppError::Validation(_))));
    assert!(matches!(dollars_to_cents(f64::NAN), Err(AppError::Validation(_))));
    assert!(matches!(dollars_to_cents(f64::INFINITY), Err(AppError::Validation(_))));
  }

  #[test]
  fn formats_cent_totals() {
    assert_eq!(format_cents(0), "0.00");
    assert_eq!(format_cents(5), "0.05");
    assert_eq!(format_cents(12497), "124.97");
    assert_eq!(format_cents(2000), "20.00");
  }
}
