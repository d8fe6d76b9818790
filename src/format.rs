//! Text helpers for the report's fixed-width layout.

/// Format a byte count as a human-readable string (B, KB, MB, GB).
///
/// Units are decimal (KB = 1000). Scaled values are rounded half-up to two
/// decimal places using integer arithmetic, then printed with a trailing
/// zero in the hundredths dropped but always at least one decimal digit:
/// `1500` → `"1.5 KB"`, `1000` → `"1.0 KB"`, `1234567890` → `"1.23 GB"`.
/// Plain byte counts carry no decimals: `999` → `"999 B"`.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1_000;
    const MB: u64 = 1_000_000;
    const GB: u64 = 1_000_000_000;

    if bytes < KB {
        return format!("{bytes} B");
    }
    let (divisor, unit) = if bytes < MB {
        (KB, "KB")
    } else if bytes < GB {
        (MB, "MB")
    } else {
        (GB, "GB")
    };

    // Hundredths of the scaled value, rounded half-up. u128 so that the
    // ×100 cannot overflow near u64::MAX.
    let hundredths = (u128::from(bytes) * 100 + u128::from(divisor) / 2) / u128::from(divisor);
    let whole = hundredths / 100;
    let frac = hundredths % 100;
    if frac % 10 == 0 {
        format!("{whole}.{} {unit}", frac / 10)
    } else {
        format!("{whole}.{frac:02} {unit}")
    }
}

/// Center `s` in a field of `width` characters.
///
/// When the padding is odd the extra space goes on the left, which is what
/// the report's 17- and 53-column fields use. Strings at least as wide as
/// the field are returned unchanged.
pub fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let pad = width - len;
    let left = pad.div_ceil(2);
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}
