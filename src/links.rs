//! Contact deep links built from a seller's phone number.

use crate::error::{MarketError, Result};
use reqwest::Url;

/// Phone stripped to digits, keeping a single leading `+` when present.
fn sanitize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    out
}

/// Price with thousands separators, whole units only (display mirrors the
/// listing cards).
pub fn format_price(price: f64) -> String {
    let whole = price.trunc().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if price < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// WhatsApp deep link with a pre-filled enquiry naming the listing.
/// Fails when the seller left no usable phone number.
pub fn whatsapp_link(phone: &str, title: &str, price: f64) -> Result<String> {
    let sanitized = sanitize_phone(phone);
    if sanitized.trim_start_matches('+').is_empty() {
        return Err(MarketError::Validation(
            "Seller phone number is not available".to_string(),
        ));
    }
    let message = format!(
        "Hi, I'm interested in your property: {} (PKR {})",
        title,
        format_price(price)
    );
    let mut url = Url::parse(&format!("https://wa.me/{sanitized}"))
        .map_err(|e| MarketError::Gateway(format!("could not build WhatsApp link: {e}")))?;
    url.query_pairs_mut().append_pair("text", &message);
    Ok(url.to_string())
}

/// Plain dialer link
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}
