//! Currency formatting for display prices.
//!
//! Covers the handful of locales the storefront ships in. Unknown locales fall
//! back to `en-US` conventions and unknown currencies render with their ISO
//! code in place of a symbol.

/// Separator and symbol placement conventions for a locale family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleStyle {
    group: &'static str,
    decimal: &'static str,
    symbol_first: bool,
}

const EN: LocaleStyle = LocaleStyle {
    group: ",",
    decimal: ".",
    symbol_first: true,
};

const CONTINENTAL: LocaleStyle = LocaleStyle {
    group: ".",
    decimal: ",",
    symbol_first: false,
};

const SPACE_GROUPED: LocaleStyle = LocaleStyle {
    group: " ",
    decimal: ",",
    symbol_first: false,
};

fn locale_style(locale: &str) -> LocaleStyle {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match language.as_str() {
        "de" | "es" | "it" | "nl" | "pt" => CONTINENTAL,
        "fr" | "ru" => SPACE_GROUPED,
        _ => EN,
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "INR" => Some("₹"),
        "KRW" => Some("₩"),
        "CNY" => Some("CN¥"),
        _ => None,
    }
}

fn minor_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats `amount` as a localized currency string, e.g. `$1,234.50`.
///
/// `currency_code` is matched case-insensitively; an empty code is treated as
/// `USD`.
#[must_use]
pub fn convert_to_locale(amount: f64, currency_code: &str, locale: &str) -> String {
    let code = if currency_code.trim().is_empty() {
        "USD".to_string()
    } else {
        currency_code.trim().to_ascii_uppercase()
    };
    let style = locale_style(locale);
    let digits = minor_digits(&code);

    let rounded = format!("{:.*}", digits, amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let sign = if amount.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    let mut number = group_digits(whole, style.group);
    if !fraction.is_empty() {
        number.push_str(style.decimal);
        number.push_str(fraction);
    }

    match (currency_symbol(&code), style.symbol_first) {
        (Some(symbol), true) => format!("{sign}{symbol}{number}"),
        (None, true) => format!("{sign}{code} {number}"),
        (Some(symbol), false) => format!("{sign}{number} {symbol}"),
        (None, false) => format!("{sign}{number} {code}"),
    }
}
