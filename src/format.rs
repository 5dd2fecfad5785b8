//! Number and currency formatting for the dashboard.

/// Groups the integer digits of `n` with `sep` every three digits.
fn group_digits(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    group_digits(n, ',')
}

/// Brazilian real with pt-BR separators: `1234.5` -> `R$ 1.234,50`.
pub fn format_brl(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!(
        "{}R$ {},{:02}",
        sign,
        group_digits(cents / 100, '.'),
        cents % 100
    )
}

/// Millions abbreviated for KPI cards: `12_345_678.0` -> `R$ 12.3M`.
///
/// Zero renders as `R$ 0`; values under a million use [`format_brl`].
pub fn format_compact_brl(value: f64) -> String {
    if value == 0.0 {
        return "R$ 0".to_string();
    }
    if value >= 1_000_000.0 {
        return format!("R$ {:.1}M", value / 1_000_000.0);
    }
    format_brl(value)
}

/// Growth badge text, e.g. `▲ 12.5%` or `▼ 3%`.
pub fn format_growth(growth: f64) -> String {
    let arrow = if growth > 0.0 { "▲" } else { "▼" };
    let rounded = (growth * 100.0).round() / 100.0;
    format!("{} {}%", arrow, rounded)
}

/// Shortens `value` to `max` characters, ending with `…` when cut.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
