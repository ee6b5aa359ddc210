//! Decimal rounding on the textual form of a number.
//!
//! Coordinates are rounded digit by digit instead of through `f64`, so
//! `0.15` rounds to `0.2` the way it reads rather than the way it is stored.

/// Round a decimal literal (`[+-]?digits.digits`) to exactly `places`
/// fractional digits, half away from zero.
///
/// Anything that is not such a literal is returned unchanged.
pub fn round_decimal(literal: &str, places: u8) -> String {
    let (sign, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => ("-", &literal[1..]),
        Some(b'+') => ("+", &literal[1..]),
        _ => ("", literal),
    };

    let Some((int_part, frac_part)) = unsigned.split_once('.') else {
        return literal.to_string();
    };
    if int_part.is_empty()
        || frac_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return literal.to_string();
    }

    let places = places as usize;

    // Kept digits, most significant first; the decimal point sits after
    // `int_part.len()` of them.
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac = frac_part.as_bytes();
    for i in 0..places {
        digits.push(frac.get(i).map_or(0, |b| b - b'0'));
    }

    let round_up = frac.get(places).is_some_and(|&b| b >= b'5');
    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(sign.len() + digits.len() + 1);
    out.push_str(sign);
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push((b'0' + d) as char);
    }
    out
}
