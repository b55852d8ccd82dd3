use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const GUEST: &str = "Guest";

#[derive(Deserialize, Debug, Default)]
pub struct TestRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl TestRequest {
    pub fn greeting(&self) -> String {
        let name = self.name.as_deref().unwrap_or(GUEST);

        format!("Hello, {name}! Data received successfully from frontend.")
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct RecommendRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact submission that passed presence checks.
///
/// Only obtainable through [`Feedback::new`] (or `TryFrom<ContactRequest>`), so every value
/// handed to the store carries three non-empty fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    name: String,
    email: String,
    message: String,
}

impl Feedback {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, AppError> {
        let (name, email, message) = (name.into(), email.into(), message.into());

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::MissingFields);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ContactRequest> for Feedback {
    type Error = AppError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        Feedback::new(
            request.name.unwrap_or_default(),
            request.email.unwrap_or_default(),
            request.message.unwrap_or_default(),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TestResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}
