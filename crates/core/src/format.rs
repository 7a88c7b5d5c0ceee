use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix used by pt-BR formatting: `R$` followed by a no-break space.
pub const CURRENCY_PREFIX: &str = "R$\u{a0}";

/// Render a price as Brazilian Real text, e.g. `R$ 1.234,56`.
///
/// Two decimals, rounded half away from zero, `.` between thousands and
/// `,` before the cents. Negative amounts get a leading `-`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX}{},{cents}", group_thousands(int_part))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
