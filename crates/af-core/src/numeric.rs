use crate::{AfError, AfResult};

/// Scalar type for flows, temperatures and capacities.
///
/// Single precision, matching the host simulation.
pub type Real = f32;

pub fn ensure_finite(v: Real, what: &'static str) -> AfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AfError::NonFinite {
            what,
            value: f64::from(v),
        })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> AfResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(AfError::Negative {
            what,
            value: f64::from(v),
        });
    }
    Ok(v)
}

/// `num / den` when `den > 0`, otherwise exactly `0.0`.
///
/// NaN divisors fall into the zero branch as well.
pub fn ratio_or_zero(num: Real, den: Real) -> Real {
    if den > 0.0 { num / den } else { 0.0 }
}
