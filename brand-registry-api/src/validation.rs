//! Standalone predicate/normalizer functions for registry identifiers.
//!
//! Each validator takes raw user input and returns either a normalized value
//! or a single [`ValidationError`]; composing them per form and collecting
//! the failures is the job of the form layer.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{ValidationCode, ValidationError};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Weighted-sum coefficients for the tax-id (CUIT/CUIL) check digit.
pub const TAX_ID_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Approved email domain suffixes.
pub const EMAIL_DOMAIN_SUFFIXES: &[&str] =
    &[".com", ".com.ar", ".ar", ".gob.ar", ".edu.ar", ".org", ".net"];

/// Maximum registrable area in hectares.
pub const MAX_AREA_HECTARES: i64 = 1_000_000;

/// Per-species livestock head-count cap.
pub const MAX_LIVESTOCK_COUNT: i64 = 100_000;

static TAX_ID_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{8}-\d$").expect("tax id layout"));

static PHONE_LAYOUTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\d{10}$",
        r"^\d{8}$",
        r"^\+54 \d{2} \d{8}$",
        r"^\+54 \d{10}$",
        r"^\(\d{3}\) \d{3}-\d{4}$",
        r"^\d{2}-\d{8}$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone layout"))
    .collect()
});

static EMAIL_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email layout"));

static USERNAME_LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username layout"));

/// Validate a national identity number: separators are stripped, the rest
/// must be 7 or 8 digits. Returns the bare digit string.
pub fn national_id(raw: &str) -> ValidationResult<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | ' ' | '-'))
        .collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            "national id must contain only digits",
        ));
    }
    if !(7..=8).contains(&cleaned.len()) {
        return Err(ValidationError::new(
            ValidationCode::LengthOutOfRange,
            "national id must have 7 or 8 digits",
        ));
    }
    Ok(cleaned)
}

/// Validate a tax id in the `NN-NNNNNNNN-N` layout, including its mod-11
/// check digit. Returns the input unchanged (hyphens kept).
pub fn tax_id(raw: &str) -> ValidationResult<String> {
    let value = raw.trim();
    if !TAX_ID_LAYOUT.is_match(value) {
        return Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            "tax id must use the NN-NNNNNNNN-N layout",
        ));
    }

    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    let sum: u32 = digits[..10]
        .iter()
        .zip(TAX_ID_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    let mut check = if remainder == 0 { 0 } else { 11 - remainder };
    // Legal special cases for the two unassignable results.
    if check == 10 {
        check = 9;
    } else if check == 11 {
        check = 1;
    }

    if check != digits[10] {
        return Err(ValidationError::new(
            ValidationCode::ChecksumMismatch,
            "tax id check digit does not match",
        ));
    }
    Ok(value.to_string())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'é' | 'í' | 'ó' | 'ú' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'ñ' | 'Ñ'
        )
}

/// Validate a person name: letters (accented, ñ) and spaces, 2–50 chars.
/// Returns the name normalized to title case with collapsed whitespace;
/// the normalization is idempotent.
pub fn person_name(raw: &str) -> ValidationResult<String> {
    let trimmed = raw.trim();
    if !trimmed.chars().all(|c| c == ' ' || is_name_char(c)) {
        return Err(ValidationError::new(
            ValidationCode::InvalidCharacters,
            "only letters and spaces are allowed",
        ));
    }

    let length = trimmed.chars().count();
    if length < 2 {
        return Err(ValidationError::new(
            ValidationCode::LengthOutOfRange,
            "must have at least 2 characters",
        ));
    }
    if length > 50 {
        return Err(ValidationError::new(
            ValidationCode::LengthOutOfRange,
            "cannot exceed 50 characters",
        ));
    }

    let mut words = Vec::new();
    for word in trimmed.split_whitespace() {
        let mut chars = word.chars();
        let mut cased = String::new();
        if let Some(first) = chars.next() {
            cased.extend(first.to_uppercase());
        }
        for c in chars {
            cased.extend(c.to_lowercase());
        }
        words.push(cased);
    }
    Ok(words.join(" "))
}

/// Validate a phone number against the accepted layout set.
pub fn phone(raw: &str) -> ValidationResult<String> {
    let value = raw.trim().to_string();
    if PHONE_LAYOUTS.iter().any(|layout| layout.is_match(&value)) {
        Ok(value)
    } else {
        Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            "phone number does not match an accepted layout",
        ))
    }
}

/// Validate an email address (lowercased) against the basic syntactic
/// pattern and the approved domain-suffix list.
pub fn email(raw: &str) -> ValidationResult<String> {
    let value = raw.trim().to_lowercase();
    if !EMAIL_LAYOUT.is_match(&value) {
        return Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            "expected an address like user@domain.com",
        ));
    }
    if !EMAIL_DOMAIN_SUFFIXES
        .iter()
        .any(|suffix| value.ends_with(suffix))
    {
        return Err(ValidationError::new(
            ValidationCode::UnapprovedDomain,
            "email domain is not on the approved list",
        ));
    }
    Ok(value)
}

/// Validate a login username: letters, digits and underscores, at most 30
/// characters.
pub fn username(raw: &str) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() || !USERNAME_LAYOUT.is_match(value) {
        return Err(ValidationError::new(
            ValidationCode::InvalidCharacters,
            "only letters, digits and underscores are allowed",
        ));
    }
    if value.len() > 30 {
        return Err(ValidationError::new(
            ValidationCode::LengthOutOfRange,
            "cannot exceed 30 characters",
        ));
    }
    Ok(value.to_string())
}

/// Validate an order number for a target entity type. `owner_of` resolves
/// the id of the live record currently holding the value, if any; the record
/// being edited (`editing`) never counts as a duplicate of itself.
pub fn order_number(
    value: i64,
    owner_of: impl Fn(i64) -> Option<Uuid>,
    editing: Option<Uuid>,
) -> ValidationResult<i64> {
    if let Some(owner) = owner_of(value) {
        if editing != Some(owner) {
            return Err(ValidationError::new(
                ValidationCode::Duplicate,
                "another record already uses this order number",
            ));
        }
    }
    if value <= 0 {
        return Err(ValidationError::new(
            ValidationCode::NotPositive,
            "order number must be positive",
        ));
    }
    Ok(value)
}

/// Validate a password: at least 8 characters, one uppercase, one lowercase,
/// one digit and one special character. All missing requirements are
/// reported together in a single message.
pub fn password(raw: &str) -> ValidationResult<String> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            "password cannot be empty",
        ));
    }

    let mut missing = Vec::new();
    if raw.chars().count() < 8 {
        missing.push("at least 8 characters");
    }
    if !raw.chars().any(|c| c.is_uppercase()) {
        missing.push("an uppercase letter");
    }
    if !raw.chars().any(|c| c.is_lowercase()) {
        missing.push("a lowercase letter");
    }
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit");
    }
    if !raw
        .chars()
        .any(|c| matches!(c, '!' | '@' | '#' | '$' | '%' | '^' | '&' | '*' | '(' | ')' | ',' | '.' | '?' | '"' | ':' | '{' | '}' | '|' | '<' | '>'))
    {
        missing.push("a special character");
    }

    if !missing.is_empty() {
        return Err(ValidationError::new(
            ValidationCode::InvalidFormat,
            format!("password must contain {}", missing.join(", ")),
        ));
    }
    Ok(raw.to_string())
}

/// Check a coordinate pair against the national bounding box
/// (latitude [-55, -21], longitude [-75, -53]).
pub fn coordinates(latitude: Decimal, longitude: Decimal) -> ValidationResult<(Decimal, Decimal)> {
    let lat_ok = latitude >= Decimal::from(-55) && latitude <= Decimal::from(-21);
    let lon_ok = longitude >= Decimal::from(-75) && longitude <= Decimal::from(-53);
    if lat_ok && lon_ok {
        Ok((latitude, longitude))
    } else {
        Err(ValidationError::new(
            ValidationCode::OutOfBounds,
            "coordinates fall outside the national bounding box",
        ))
    }
}

/// Validate a registered area in hectares: non-negative and bounded.
pub fn area_hectares(value: Decimal) -> ValidationResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(ValidationError::new(
            ValidationCode::NotPositive,
            "area cannot be negative",
        ));
    }
    if value > Decimal::from(MAX_AREA_HECTARES) {
        return Err(ValidationError::new(
            ValidationCode::OutOfBounds,
            "area cannot exceed 1000000 hectares",
        ));
    }
    Ok(value)
}

/// Validate a per-species livestock head count: 0..=100000.
pub fn livestock_count(value: i64) -> ValidationResult<i32> {
    if value < 0 {
        return Err(ValidationError::new(
            ValidationCode::OutOfBounds,
            "head count cannot be negative",
        ));
    }
    if value > MAX_LIVESTOCK_COUNT {
        return Err(ValidationError::new(
            ValidationCode::OutOfBounds,
            "head count cannot exceed 100000",
        ));
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of<T: std::fmt::Debug>(result: ValidationResult<T>) -> ValidationCode {
        result.expect_err("expected a validation error").code
    }

    #[test]
    fn national_id_strips_separators() {
        assert_eq!(national_id("12.345.678").unwrap(), "12345678");
        assert_eq!(national_id("12 345 678").unwrap(), "12345678");
        assert_eq!(national_id("1234567").unwrap(), "1234567");
    }

    #[test]
    fn national_id_rejects_non_digits() {
        assert_eq!(code_of(national_id("12a45678")), ValidationCode::InvalidFormat);
        assert_eq!(code_of(national_id("")), ValidationCode::InvalidFormat);
    }

    #[test]
    fn national_id_rejects_wrong_length() {
        assert_eq!(code_of(national_id("123456")), ValidationCode::LengthOutOfRange);
        assert_eq!(code_of(national_id("123456789")), ValidationCode::LengthOutOfRange);
    }

    #[test]
    fn tax_id_accepts_valid_check_digit() {
        // 2,0,1,2,3,4,5,6,7,8 against [5,4,3,2,7,6,5,4,3,2] sums to 148,
        // remainder 5, check digit 6.
        assert_eq!(tax_id("20-12345678-6").unwrap(), "20-12345678-6");
    }

    #[test]
    fn tax_id_accepts_remainder_zero() {
        // Sum 143 is divisible by 11, so the check digit is 0.
        assert_eq!(tax_id("10-12345678-0").unwrap(), "10-12345678-0");
    }

    #[test]
    fn tax_id_maps_ten_to_nine() {
        // Sum 144 leaves remainder 1, raw check digit 10, mapped to 9.
        assert_eq!(tax_id("20-12345676-9").unwrap(), "20-12345676-9");
    }

    #[test]
    fn tax_id_rejects_wrong_check_digit() {
        assert_eq!(code_of(tax_id("20-12345678-9")), ValidationCode::ChecksumMismatch);
    }

    #[test]
    fn tax_id_rejects_bad_layout() {
        assert_eq!(code_of(tax_id("20123456786")), ValidationCode::InvalidFormat);
        assert_eq!(code_of(tax_id("20-1234567-86")), ValidationCode::InvalidFormat);
        assert_eq!(code_of(tax_id("")), ValidationCode::InvalidFormat);
    }

    #[test]
    fn person_name_title_cases() {
        assert_eq!(person_name("juan pérez").unwrap(), "Juan Pérez");
        assert_eq!(person_name("MARÍA DEL CARMEN").unwrap(), "María Del Carmen");
        assert_eq!(person_name("  ñandú  ").unwrap(), "Ñandú");
    }

    #[test]
    fn person_name_is_idempotent() {
        let once = person_name("juan pérez").unwrap();
        assert_eq!(person_name(&once).unwrap(), once);
    }

    #[test]
    fn person_name_rejects_other_characters() {
        assert_eq!(code_of(person_name("j0hn")), ValidationCode::InvalidCharacters);
        assert_eq!(code_of(person_name("juan-pablo")), ValidationCode::InvalidCharacters);
    }

    #[test]
    fn person_name_enforces_length() {
        assert_eq!(code_of(person_name("j")), ValidationCode::LengthOutOfRange);
        let long = "a".repeat(51);
        assert_eq!(code_of(person_name(&long)), ValidationCode::LengthOutOfRange);
    }

    #[test]
    fn phone_accepts_known_layouts() {
        for value in [
            "3511234567",
            "12345678",
            "+54 35 11234567",
            "+54 3511234567",
            "(351) 123-4567",
            "35-11234567",
        ] {
            assert!(phone(value).is_ok(), "{value} should validate");
        }
    }

    #[test]
    fn phone_rejects_other_layouts() {
        assert_eq!(code_of(phone("123")), ValidationCode::InvalidFormat);
        assert_eq!(code_of(phone("351-123-4567")), ValidationCode::InvalidFormat);
    }

    #[test]
    fn email_lowercases_and_checks_domain() {
        assert_eq!(email("User@Ejemplo.COM").unwrap(), "user@ejemplo.com");
        assert_eq!(email("a@b.gob.ar").unwrap(), "a@b.gob.ar");
    }

    #[test]
    fn email_rejects_bad_syntax_and_domains() {
        assert_eq!(code_of(email("not-an-email")), ValidationCode::InvalidFormat);
        assert_eq!(code_of(email("user@dominio.xyz")), ValidationCode::UnapprovedDomain);
    }

    #[test]
    fn username_accepts_word_characters_only() {
        assert_eq!(username("ins_pector1").unwrap(), "ins_pector1");
        assert_eq!(code_of(username("nombre con espacios")), ValidationCode::InvalidCharacters);
        assert_eq!(code_of(username(&"u".repeat(31))), ValidationCode::LengthOutOfRange);
    }

    #[test]
    fn order_number_requires_positive() {
        assert_eq!(code_of(order_number(0, |_| None, None)), ValidationCode::NotPositive);
        assert_eq!(code_of(order_number(-3, |_| None, None)), ValidationCode::NotPositive);
        assert_eq!(order_number(10, |_| None, None).unwrap(), 10);
    }

    #[test]
    fn order_number_rejects_values_held_by_other_records() {
        let holder = Uuid::new_v4();
        let owner_of = |value: i64| (value == 42).then_some(holder);

        assert_eq!(code_of(order_number(42, owner_of, None)), ValidationCode::Duplicate);
        assert_eq!(
            code_of(order_number(42, owner_of, Some(Uuid::new_v4()))),
            ValidationCode::Duplicate
        );
        // The record being edited keeps its own number.
        assert_eq!(order_number(42, owner_of, Some(holder)).unwrap(), 42);
    }

    #[test]
    fn password_reports_all_missing_requirements() {
        let error = password("abc").expect_err("weak password");
        assert_eq!(error.code, ValidationCode::InvalidFormat);
        assert!(error.message.contains("at least 8 characters"));
        assert!(error.message.contains("an uppercase letter"));
        assert!(error.message.contains("a digit"));
        assert!(error.message.contains("a special character"));
        assert!(!error.message.contains("a lowercase letter"));
    }

    #[test]
    fn password_accepts_strong_values() {
        assert!(password("Segura#2024").is_ok());
    }

    #[test]
    fn coordinates_inside_bounding_box_pass() {
        let (lat, lon) = coordinates(Decimal::from(-30), Decimal::from(-64)).unwrap();
        assert_eq!(lat, Decimal::from(-30));
        assert_eq!(lon, Decimal::from(-64));
    }

    #[test]
    fn coordinates_outside_bounding_box_fail() {
        assert_eq!(
            code_of(coordinates(Decimal::from(10), Decimal::from(-64))),
            ValidationCode::OutOfBounds
        );
        assert_eq!(
            code_of(coordinates(Decimal::from(-30), Decimal::from(-80))),
            ValidationCode::OutOfBounds
        );
    }

    #[test]
    fn area_bounds() {
        assert!(area_hectares(Decimal::ZERO).is_ok());
        assert!(area_hectares(Decimal::from(1_000_000)).is_ok());
        assert_eq!(code_of(area_hectares(Decimal::from(-1))), ValidationCode::NotPositive);
        assert_eq!(
            code_of(area_hectares(Decimal::from(1_000_001))),
            ValidationCode::OutOfBounds
        );
    }

    #[test]
    fn livestock_count_bounds() {
        assert_eq!(livestock_count(0).unwrap(), 0);
        assert_eq!(livestock_count(100_000).unwrap(), 100_000);
        assert_eq!(code_of(livestock_count(-1)), ValidationCode::OutOfBounds);
        assert_eq!(code_of(livestock_count(100_001)), ValidationCode::OutOfBounds);
    }
}
