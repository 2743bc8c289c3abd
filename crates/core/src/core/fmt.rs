//! Float formatting for CSS values.
//!
//! Rust's core float-to-decimal formatting has had wasm-facing panics in some
//! toolchain/browser combinations (see `dragon.rs` panics). These helpers do
//! **not** use `format!` on floats: finite values are scaled and rounded into
//! an `i64`, then formatted as integers.

/// Up to three decimals, trailing zeros dropped: `0.6`, `30`, `-12.5`.
/// Non-finite input yields `"0"`, which is always a valid CSS number.
pub fn fmt_css_number(v: f64) -> String {
    let fixed = fmt_f64_fixed(v, 3);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }

    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scale_f = scale_i64 as f64;

    let scaled = (v * scale_f).round();
    // `i64::MAX as f64` rounds up to 2^63, so the bound must be exclusive.
    if !scaled.is_finite() || scaled.abs() >= (i64::MAX as f64) {
        return "0".to_string();
    }

    let scaled_i = scaled as i64;
    let abs_i = scaled_i.unsigned_abs();
    let scale_u64 = scale_i64.unsigned_abs();
    let int_part = abs_i / scale_u64;
    let frac_part = abs_i % scale_u64;

    let mut out = String::new();
    if scaled_i < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        // Left-pad with zeros.
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}
