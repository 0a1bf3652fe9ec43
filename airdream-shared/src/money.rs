/// Amounts are carried as integer minor units (cents) everywhere.
pub type Cents = i32;

/// Render an amount in cents with exactly two decimals, e.g. `94698` -> `"946.98"`.
pub fn format_cents(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = (amount as i64).abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount (`"18.99"`, `"599"`, `"3.5"`) into cents.
///
/// More than two fractional digits are truncated.
pub fn parse_cents(input: &str) -> Option<Cents> {
    let input = input.trim();
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (whole, fraction) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction[..2].parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(fraction)?;
    let cents = if negative { -cents } else { cents };
    Cents::try_from(cents).ok()
}
