//! Field validation helpers. Each helper appends "field: message" strings
//! to the caller's error list; an empty list after all checks means the
//! request payload is acceptable.

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .unwrap_or_else(|e| panic!("email regex: {e}"))
    })
}

pub fn require_text(errors: &mut Vec<String>, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field}: {label} is required"));
    }
}

pub fn require_id(errors: &mut Vec<String>, field: &str, label: &str, value: Option<i64>) {
    if value.is_none() {
        errors.push(format!("{field}: {label} is required"));
    }
}

pub fn require_some<T>(errors: &mut Vec<String>, field: &str, label: &str, value: &Option<T>) {
    if value.is_none() {
        errors.push(format!("{field}: {label} is required"));
    }
}

pub fn max_len(errors: &mut Vec<String>, field: &str, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(format!("{field}: {label} must not exceed {max} characters"));
    }
}

pub fn max_len_opt(
    errors: &mut Vec<String>,
    field: &str,
    label: &str,
    value: Option<&str>,
    max: usize,
) {
    if let Some(v) = value {
        max_len(errors, field, label, v, max);
    }
}

/// Format check only; blank emails are handled by `require_text`.
pub fn email(errors: &mut Vec<String>, field: &str, value: &str) {
    if !value.trim().is_empty() && !email_regex().is_match(value.trim()) {
        errors.push(format!("{field}: Email should be valid"));
    }
}

pub fn at_least_i32(errors: &mut Vec<String>, field: &str, label: &str, value: Option<i32>, min: i32) {
    if let Some(v) = value {
        if v < min {
            errors.push(format!("{field}: {label} must be at least {min}"));
        }
    }
}

pub fn at_most_i32(errors: &mut Vec<String>, field: &str, label: &str, value: Option<i32>, max: i32) {
    if let Some(v) = value {
        if v > max {
            errors.push(format!("{field}: {label} must not exceed {max}"));
        }
    }
}

pub fn at_most_f64(errors: &mut Vec<String>, field: &str, label: &str, value: Option<f64>, max: f64) {
    if let Some(v) = value {
        if v > max {
            errors.push(format!("{field}: {label} must not exceed {max}"));
        }
    }
}
