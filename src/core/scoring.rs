use crate::core::Receipt;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Computes the point total for a receipt. Pure and infallible: malformed
/// numeric or date text contributes nothing instead of erroring.
pub fn score(receipt: &Receipt) -> i64 {
    let mut points = 0i64;

    // One point for every alphanumeric character in the retailer name
    points += receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as i64;

    // 50 points if the total is a round dollar amount with no cents
    if receipt.total.ends_with(".00") {
        points += 50;
    }

    // 25 points if the total is a multiple of 0.25
    if let Some(total) = parse_amount(&receipt.total) {
        if total % 0.25 == 0.0 {
            points += 25;
        }
    }

    // 5 points for every two items on the receipt
    points += (receipt.items.len() / 2) as i64 * 5;

    // Items whose trimmed description length is a multiple of 3 earn 20% of
    // their price, rounded up. Length 0 qualifies.
    for item in &receipt.items {
        if item.short_description.trim().len() % 3 == 0 {
            if let Some(price) = parse_amount(&item.price) {
                points += (price * 0.2).ceil() as i64;
            }
        }
    }

    // 6 points if the day in the purchase date is odd
    if let Some(date) = parse_date(&receipt.purchase_date) {
        if date.day() % 2 == 1 {
            points += 6;
        }
    }

    // 10 points for purchases between 2:00pm and 2:59pm
    if let Some(time) = parse_time(&receipt.purchase_time) {
        if time.hour() == 14 {
            points += 10;
        }
    }

    points
}

fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}
