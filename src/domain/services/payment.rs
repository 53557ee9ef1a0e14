use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use crate::error::AppError;

/// Card input as submitted by the checkout form. Number and cvv arrive
/// stripped of spaces; expiry is `MM/YY`.
#[derive(Debug, Deserialize, Clone)]
pub struct CardDetails {
    pub name: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

/// Format validation only. Runs before authorization and never touches
/// booking state.
pub fn validate_card(card: &CardDetails, today: NaiveDate) -> Result<(), AppError> {
    if card.name.trim().is_empty() {
        return Err(AppError::Validation("Cardholder name is required".into()));
    }

    if card.number.is_empty() || !card.number.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation("Card number must contain digits only".into()));
    }
    if card.number.len() < 13 || card.number.len() > 19 {
        return Err(AppError::Validation("Card number must be 13 to 19 digits".into()));
    }
    if !luhn_valid(&card.number) {
        return Err(AppError::Validation("Invalid card number".into()));
    }

    let (month, year) = parse_expiry(&card.expiry)?;
    if (year, month) < (today.year(), today.month() as i32) {
        return Err(AppError::Validation("Card has expired".into()));
    }

    if card.cvv.len() != 3 || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation("CVV must be 3 digits".into()));
    }

    Ok(())
}

/// Simulated issuer authorization. Deterministic: sandbox-style decline
/// numbers (ending 0002) are rejected, everything else clears.
pub fn authorize(card: &CardDetails) -> Result<(), AppError> {
    if card.number.ends_with("0002") {
        return Err(AppError::PaymentRejected("Card declined by issuer".into()));
    }
    Ok(())
}

fn parse_expiry(expiry: &str) -> Result<(i32, i32), AppError> {
    let invalid = || AppError::Validation("Expiry must be in MM/YY format".into());

    let (mm, yy) = expiry.split_once('/').ok_or_else(invalid)?;
    if mm.len() != 2 || yy.len() != 2 {
        return Err(invalid());
    }

    let month: i32 = mm.parse().map_err(|_| invalid())?;
    let year: i32 = yy.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((month, 2000 + year))
}

fn luhn_valid(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}
