// pw-core/src/units.rs

//! Conversion constants and helpers for the user-facing unit set.
//!
//! Inputs arrive in field units (m³/h, mm, hours) and every formula is
//! defined over SI plus a fixed billing calendar. The constants below pin
//! that arithmetic in one place so the calculators stay bit-for-bit
//! reproducible.

/// Gravitational acceleration (m/s²) used by every head and power formula.
pub const G_MPS2: f64 = 9.81;

/// Seconds per hour, divisor for m³/h → m³/s.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Millimetres per metre, divisor for mm → m.
pub const MM_PER_M: f64 = 1000.0;

/// Watts per kilowatt.
pub const W_PER_KW: f64 = 1000.0;

/// Billing month length in days, a fixed part of the cost model.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Billing year length in months, a fixed part of the cost model.
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[inline]
pub fn m3h_to_m3s(flow_m3_per_h: f64) -> f64 {
    flow_m3_per_h / SECONDS_PER_HOUR
}

#[inline]
pub fn mm_to_m(v_mm: f64) -> f64 {
    v_mm / MM_PER_M
}

#[inline]
pub fn w_to_kw(power_w: f64) -> f64 {
    power_w / W_PER_KW
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_smoke() {
        assert_eq!(m3h_to_m3s(3600.0), 1.0);
        assert_eq!(mm_to_m(1000.0), 1.0);
        assert_eq!(w_to_kw(1500.0), 1.5);
    }

    #[test]
    fn gravity_is_the_model_value() {
        // 9.81, not the standard-gravity 9.80665: the cost formulas are
        // defined with the rounded constant.
        assert_eq!(G_MPS2, 9.81);
    }
}
