use iso_currency::Currency;

/// Formats a signed amount as Naira text, e.g. `₦5,000.00` or `-₦150.25`.
///
/// Two decimal places, thousands grouping, symbol from the ISO table.
pub fn format_naira(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{}{grouped}.{cents}", Currency::NGN.symbol())
}
