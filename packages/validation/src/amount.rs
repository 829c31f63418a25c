use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Smallest donation the tracker accepts, in dollars
pub const MINIMUM_DONATION: Decimal = Decimal::ONE;

/// Most significant digits a `Decimal` holds exactly
const MAX_DIGITS: i64 = 28;

// ASCII digits only; `\d` would also accept other Unicode digits.
static AMOUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$").unwrap()
});

/// Parses a currency amount as a fixed-point decimal.
///
/// Accepts an optional sign, digits with an optional decimal point, and an
/// optional exponent (`1e2`), ignoring surrounding whitespace the way a
/// number input reports its value. Anything else yields `None`.
///
/// Magnitudes too large for a `Decimal` saturate at `Decimal::MAX` or
/// `Decimal::MIN`. Values needing more than 28 significant digits, or
/// digits past the 28th decimal place, cannot be held exactly and yield
/// `None` rather than being rounded.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let caps = AMOUNT_REGEX.captures(value.trim())?;
    let negative = &caps[1] == "-";
    let whole = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let exponent = match caps.get(4) {
        Some(m) => m.as_str().parse::<i64>().unwrap_or(if m.as_str().starts_with('-') {
            i64::MIN / 2
        } else {
            i64::MAX / 2
        }),
        None => 0,
    };

    let digits = format!("{}{}", whole, fraction);
    let digits = digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }

    // The amount is `significant * 10^power`
    let power = exponent
        .saturating_sub(fraction.len() as i64)
        .saturating_add((digits.len() - significant.len()) as i64);
    let integer_digits = (significant.len() as i64).saturating_add(power);
    if integer_digits > MAX_DIGITS {
        return Some(if negative { Decimal::MIN } else { Decimal::MAX });
    }
    if significant.len() as i64 > MAX_DIGITS || power < -MAX_DIGITS {
        return None;
    }

    let mantissa: i128 = significant.parse().ok()?;
    let mantissa = if negative { -mantissa } else { mantissa };
    if power >= 0 {
        let scaled = mantissa.checked_mul(10i128.checked_pow(power as u32)?)?;
        Decimal::try_from_i128_with_scale(scaled, 0).ok()
    } else {
        Decimal::try_from_i128_with_scale(mantissa, (-power) as u32).ok()
    }
}
