//! Step definitions for the signup flow

use super::validation::{
    validate_branch, validate_college, validate_email, validate_name, validate_phone, Validation,
};
use serde::{Deserialize, Serialize};

/// Identifier of a collected value, doubling as the key into `FormRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Phone,
    Email,
    College,
    Branch,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::College => "college",
            Self::Branch => "branch",
        }
    }
}

/// Kind of input control to render for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Phone,
    Email,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }
}

/// Static definition of one step: what to ask and how to check the answer
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: FieldId,
    pub prompt: &'static str,
    pub hint: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    validator: fn(&str) -> Validation,
}

impl FieldSpec {
    pub fn new(
        id: FieldId,
        prompt: &'static str,
        hint: &'static str,
        placeholder: &'static str,
        kind: InputKind,
        validator: fn(&str) -> Validation,
    ) -> Self {
        Self {
            id,
            prompt,
            hint,
            placeholder,
            kind,
            validator,
        }
    }

    /// Run the step's predicate on a candidate value
    pub fn validate(&self, value: &str) -> Validation {
        (self.validator)(value)
    }
}

/// The five signup steps, in order
pub fn signup_steps() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new(
            FieldId::Name,
            "What is your full name?",
            "We'll use this on your profile.",
            "Type your answer here...",
            InputKind::Text,
            validate_name,
        ),
        FieldSpec::new(
            FieldId::Phone,
            "Your phone number?",
            "Include country code — e.g. +91 9876543210",
            "+91 9876543210",
            InputKind::Phone,
            validate_phone,
        ),
        FieldSpec::new(
            FieldId::Email,
            "Your student email?",
            "Must be your official college email. We verify it's academic.",
            "you@college.edu.in",
            InputKind::Email,
            validate_email,
        ),
        FieldSpec::new(
            FieldId::College,
            "Which college do you attend?",
            "Full name of your institution.",
            "Punjab Engineering College, Chandigarh",
            InputKind::Text,
            validate_college,
        ),
        FieldSpec::new(
            FieldId::Branch,
            "What's your branch or major?",
            "e.g. Computer Science, Mechanical Engineering, ECE…",
            "Computer Science & Engineering",
            InputKind::Text,
            validate_branch,
        ),
    ]
}
