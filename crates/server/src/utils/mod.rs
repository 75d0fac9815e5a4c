//! Response formatting helpers.

use num_bigint::BigUint;

use crate::consts::CLAW_DECIMALS;

/// Render an attoCLAW amount as a human-readable CLAW string with
/// thousands separators and two decimal places, e.g. "1,234.56 CLAW".
///
/// Truncates rather than rounds; display strings are informational, the
/// exact value is always served alongside.
pub fn format_claw(atto: &BigUint) -> String {
    let cents_scale = BigUint::from(10u8).pow(CLAW_DECIMALS - 2);
    let cents = atto / &cents_scale;
    let hundred = BigUint::from(100u8);
    let whole = &cents / &hundred;
    let frac = u64::try_from(&cents % &hundred).unwrap_or(0);

    format!("{}.{:02} CLAW", group_thousands(&whole.to_string()), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
