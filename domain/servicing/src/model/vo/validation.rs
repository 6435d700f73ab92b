use std::fmt;

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TextField;

pub type ValidationResult<T> = Result<T, ValidationErrors>;

static USER_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[0-9\s()-]{6,20}$").unwrap());
static CLIENT_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[0-9\s()/-]{6,25}$").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// One rejected field, keyed by its wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every violation found in one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldViolation {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>();
        write!(f, "Invalid input: {}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Values a validator may depend on besides its input.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// Turns a raw input record into its normalized form.
pub trait Validate {
    type Output;

    fn validate(self, ctx: &ValidationContext) -> ValidationResult<Self::Output>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    /// Accounts and technicians: digits, spaces, `(`, `)` and `-`, 6 to 20 long.
    User,
    /// Client contacts additionally allow `/`, up to 25 long.
    Client,
}

/// Collects violations field by field.
///
/// Every check records its own violations and hands back a best-effort value
/// so the caller can keep going and build the output in one pass;
/// [`Checker::finish`] throws that output away if anything was recorded.
pub struct Checker<'a> {
    ctx: &'a ValidationContext,
    errors: Vec<FieldViolation>,
}

impl<'a> Checker<'a> {
    pub fn new(ctx: &'a ValidationContext) -> Self {
        Self {
            ctx,
            errors: vec![],
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.ctx.today
    }

    pub fn violation(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldViolation {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn has_violation(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn missing(&mut self, field: &str) {
        self.violation(field, format!("{field} is required"));
    }

    fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        if len < min {
            if min == 1 {
                self.violation(field, format!("{field} must not be empty"));
            } else {
                self.violation(field, format!("{field} must be at least {min} characters"));
            }
            false
        } else if len > max {
            self.violation(field, format!("{field} must be at most {max} characters"));
            false
        } else {
            true
        }
    }

    /// Required text of `min..=max` characters.
    pub fn text(&mut self, field: &str, value: Option<String>, min: usize, max: usize) -> String {
        match value {
            Some(value) => {
                self.length(field, &value, min, max);
                value
            }
            None => {
                self.missing(field);
                String::new()
            }
        }
    }

    /// Like [`Checker::text`], surrounding whitespace removed first.
    pub fn trimmed_text(
        &mut self,
        field: &str,
        value: Option<String>,
        min: usize,
        max: usize,
    ) -> String {
        self.text(field, value.map(|v| v.trim().to_string()), min, max)
    }

    /// Optional text; the empty string is accepted and stored as unset.
    pub fn optional_text(
        &mut self,
        field: &str,
        value: TextField,
        min: usize,
        max: usize,
    ) -> Option<String> {
        let value = value.into_option()?;
        self.length(field, &value, min, max);
        Some(value)
    }

    fn check_email(&mut self, field: &str, value: &str) {
        let local = value.split('@').next().unwrap_or_default();
        if !EMAIL.is_match(value)
            || local.starts_with('.')
            || local.ends_with('.')
            || value.contains("..")
        {
            self.violation(field, format!("{field} must be a valid email address"));
        }
    }

    pub fn email(&mut self, field: &str, value: Option<String>) -> String {
        match value {
            Some(value) => {
                self.check_email(field, &value);
                value
            }
            None => {
                self.missing(field);
                String::new()
            }
        }
    }

    pub fn optional_email(&mut self, field: &str, value: TextField) -> Option<String> {
        let value = value.into_option()?;
        self.check_email(field, &value);
        Some(value)
    }

    fn check_phone(&mut self, field: &str, value: &str, rule: PhoneRule) {
        if value.chars().count() < 6 {
            self.violation(field, format!("{field} must be at least 6 characters"));
            return;
        }
        let (pattern, allowed) = match rule {
            PhoneRule::User => (&*USER_PHONE, "digits, spaces, +, (, ) and -"),
            PhoneRule::Client => (&*CLIENT_PHONE, "digits, spaces, +, (, ), / and -"),
        };
        if !pattern.is_match(value) {
            self.violation(field, format!("{field} may only contain {allowed}"));
        }
    }

    pub fn phone(&mut self, field: &str, value: Option<String>, rule: PhoneRule) -> String {
        match value {
            Some(value) => {
                self.check_phone(field, &value, rule);
                value
            }
            None => {
                self.missing(field);
                String::new()
            }
        }
    }

    pub fn optional_phone(
        &mut self,
        field: &str,
        value: TextField,
        rule: PhoneRule,
    ) -> Option<String> {
        let value = value.into_option()?;
        self.check_phone(field, &value, rule);
        Some(value)
    }

    fn parse_date(&mut self, field: &str, value: &str) -> Option<NaiveDate> {
        if !ISO_DATE.is_match(value) {
            self.violation(field, format!("{field} must use the YYYY-MM-DD format"));
            return None;
        }
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.violation(field, format!("{field} is not a real calendar date"));
                None
            }
        }
    }

    /// Required `YYYY-MM-DD` date; falls back to today when rejected.
    pub fn date(&mut self, field: &str, value: Option<String>) -> NaiveDate {
        match value {
            Some(value) => self.parse_date(field, &value).unwrap_or(self.ctx.today),
            None => {
                self.missing(field);
                self.ctx.today
            }
        }
    }

    pub fn optional_date(&mut self, field: &str, value: TextField) -> Option<NaiveDate> {
        let value = value.into_option()?;
        self.parse_date(field, &value)
    }

    pub fn not_in_future(&mut self, field: &str, date: Option<NaiveDate>) {
        if let Some(date) = date {
            if date > self.ctx.today {
                self.violation(field, format!("{field} must not be in the future"));
            }
        }
    }

    /// Text that must hold a json array when non-empty.
    pub fn json_list(&mut self, field: &str, value: TextField, max: usize) -> Option<String> {
        let value = value.into_option()?;
        if self.length(field, &value, 0, max)
            && serde_json::from_str::<Vec<serde_json::Value>>(&value).is_err()
        {
            self.violation(field, format!("{field} must be a json list"));
        }
        Some(value)
    }

    fn parse_id(&mut self, field: &str, value: &str) -> Option<Uuid> {
        match Uuid::parse_str(value) {
            Ok(id) => Some(id),
            Err(_) => {
                self.violation(field, format!("{field} must be a valid id"));
                None
            }
        }
    }

    /// Required id; the nil id stands in when rejected.
    pub fn id(&mut self, field: &str, value: Option<String>) -> Uuid {
        match value {
            Some(value) => self.parse_id(field, &value).unwrap_or_default(),
            None => {
                self.missing(field);
                Uuid::nil()
            }
        }
    }

    pub fn optional_id(&mut self, field: &str, value: TextField) -> Option<Uuid> {
        let value = value.into_option()?;
        self.parse_id(field, &value)
    }

    /// Optional member of a closed vocabulary, parsed through its serde names.
    pub fn choice<E: DeserializeOwned>(&mut self, field: &str, value: Option<String>) -> Option<E> {
        let value = value?;
        match serde_json::from_value::<E>(serde_json::Value::String(value.clone())) {
            Ok(v) => Some(v),
            Err(_) => {
                self.violation(field, format!(r#"{field} has an invalid value "{value}""#));
                None
            }
        }
    }

    pub fn required_choice<E: DeserializeOwned + Default>(
        &mut self,
        field: &str,
        value: Option<String>,
    ) -> E {
        if value.is_none() {
            self.missing(field);
            return E::default();
        }
        self.choice(field, value).unwrap_or_default()
    }

    /// Required whole number in `min..=max`.
    pub fn in_range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) -> i32 {
        let Some(value) = value else {
            self.missing(field);
            return 0;
        };
        if value < min || value > max {
            self.violation(field, format!("{field} must be between {min} and {max}"));
            return 0;
        }
        value as i32
    }

    /// Required count greater than zero.
    pub fn positive(&mut self, field: &str, value: Option<i64>) -> i32 {
        let Some(value) = value else {
            self.missing(field);
            return 0;
        };
        if value <= 0 {
            self.violation(field, format!("{field} must be greater than zero"));
            return 0;
        }
        if value > i32::MAX as i64 {
            self.violation(field, format!("{field} is too large"));
            return 0;
        }
        value as i32
    }

    pub fn url(&mut self, field: &str, value: TextField) -> Option<String> {
        let value = value.into_option()?;
        match url::Url::parse(&value) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => {}
            _ => self.violation(field, format!("{field} must be a valid http(s) url")),
        }
        Some(value)
    }

    pub fn finish<T>(self, output: T) -> ValidationResult<T> {
        if self.errors.is_empty() {
            Ok(output)
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}
