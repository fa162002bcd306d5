use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

use super::draft::FormDraft;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9()\-.\s]+$").expect("Invalid phone regex"));

/// Constraint applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Optional,
    /// Required and shaped like `local@domain.tld`.
    Email,
    /// Required; digits with optional `+`, spaces, dashes, dots and
    /// parentheses, 7 to 15 digits.
    Phone,
}

impl FieldRule {
    pub fn is_required(self) -> bool {
        !matches!(self, FieldRule::Optional)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    PHONE_REGEX.is_match(value) && (7..=15).contains(&digits)
}

/// Ordered field rules for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<(String, FieldRule)>,
}

impl FormSchema {
    pub fn new<'a>(fields: impl IntoIterator<Item = (&'a str, FieldRule)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, rule)| (name.to_string(), rule))
                .collect(),
        }
    }

    /// Newsletter sign-up: name and email.
    pub fn newsletter() -> Self {
        Self::new([("name", FieldRule::Required), ("email", FieldRule::Email)])
    }

    /// Event booking request.
    pub fn booking() -> Self {
        Self::new([
            ("name", FieldRule::Required),
            ("email", FieldRule::Email),
            ("phone", FieldRule::Phone),
            ("eventType", FieldRule::Optional),
            ("message", FieldRule::Optional),
        ])
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldRule)> {
        self.fields.iter().map(|(n, r)| (n.as_str(), *r))
    }

    pub fn blank_draft(&self) -> FormDraft {
        FormDraft::with_fields(self.fields.iter().map(|(n, _)| n.as_str()))
    }

    /// Check `draft`. Missing required fields are reported before format
    /// problems, each in field order.
    pub fn validate(&self, draft: &FormDraft) -> Result<(), ValidationError> {
        if let Some((name, _)) = self
            .fields
            .iter()
            .find(|(name, rule)| rule.is_required() && draft.trimmed(name).is_empty())
        {
            return Err(ValidationError::MissingField(name.clone()));
        }

        for (name, rule) in &self.fields {
            let value = draft.trimmed(name);
            match rule {
                FieldRule::Email if !is_valid_email(value) => {
                    return Err(ValidationError::InvalidEmail(name.clone()));
                }
                FieldRule::Phone if !is_valid_phone(value) => {
                    return Err(ValidationError::InvalidPhone(name.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
