//! Pure pre-write checks. Every rule fails fast with a single
//! human-readable message naming the first violated constraint; nothing
//! here touches the gateway.

use crate::error::{MarketError, Result};
use crate::models::{NewProperty, SignUpRequest, UserRole};

fn fail(message: &str) -> MarketError {
    MarketError::Validation(message.to_string())
}

pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.len() > 255 {
        return Err(fail("Email must be at most 255 characters"));
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let well_formed = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if !well_formed {
        return Err(fail("Invalid email address"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(fail("Password must be at least 6 characters"));
    }
    if password.len() > 100 {
        return Err(fail("Password must be at most 100 characters"));
    }
    Ok(())
}

pub fn validate_full_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(fail("Name is required"));
    }
    if name.len() > 100 {
        return Err(fail("Name must be at most 100 characters"));
    }
    Ok(())
}

/// Permissive phone check: digits plus the separators people actually type.
pub fn validate_phone(phone: &str) -> Result<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(fail("Phone number is required"));
    }
    if phone.len() > 20 {
        return Err(fail("Phone number must be at most 20 characters"));
    }
    let allowed =
        |c: char| c.is_ascii_digit() || c == ' ' || c == '-' || c == '+' || c == '(' || c == ')';
    if !phone.chars().all(allowed) {
        return Err(fail("Invalid phone number format"));
    }
    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    validate_email(email)?;
    validate_password(password)
}

/// Sign-up checks. Sellers must leave a phone number; buyers may not have one.
pub fn validate_sign_up(request: &SignUpRequest) -> Result<()> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;
    validate_full_name(&request.full_name)?;
    if request.role == UserRole::Seller {
        validate_phone(request.phone.as_deref().unwrap_or(""))?;
    }
    Ok(())
}

/// Checks a candidate listing before it may reach the gateway.
pub fn validate_new_property(property: &NewProperty) -> Result<()> {
    let title = property.title.trim();
    if title.len() < 5 {
        return Err(fail("Title must be at least 5 characters"));
    }
    if title.len() > 200 {
        return Err(fail("Title must be at most 200 characters"));
    }

    let description = property.description.trim();
    if description.len() < 20 {
        return Err(fail("Description must be at least 20 characters"));
    }
    if description.len() > 5000 {
        return Err(fail("Description must be at most 5000 characters"));
    }

    let location = property.location.trim();
    if location.len() < 3 {
        return Err(fail("Location is required"));
    }
    if location.len() > 200 {
        return Err(fail("Location must be at most 200 characters"));
    }

    if !(property.price > 0.0) || !property.price.is_finite() {
        return Err(fail("Price must be greater than 0"));
    }
    if property.bedrooms < 0 {
        return Err(fail("Bedrooms must be 0 or greater"));
    }
    if property.bathrooms < 0 {
        return Err(fail("Bathrooms must be 0 or greater"));
    }
    if let Some(area) = property.area_sqft {
        if area <= 0 {
            return Err(fail("Area must be greater than 0"));
        }
    }
    if let (Some(from), Some(to)) = (property.available_from, property.available_to) {
        if from > to {
            return Err(fail("Available-from date must be on or before available-to date"));
        }
    }

    Ok(())
}
