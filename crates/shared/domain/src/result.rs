//! Service result container.
//!
//! Mutating service operations report validation and business failures as
//! values instead of errors. A `ServiceResult` either carries the payload or a
//! non-empty, ordered list of messages; success is derived from the variant.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Severity of a result message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Success,
    Invalid,
    NotFound,
}

/// A single message attached to a failed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub message: String,
    pub kind: ResultKind,
}

impl ResultMessage {
    pub fn new(message: impl Into<String>, kind: ResultKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(message, ResultKind::Invalid)
    }
}

/// Outcome of a mutating service operation.
///
/// Callers check [`ServiceResult::is_success`] (or match) before reading the
/// payload. `Failure` is never built with an empty message list.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult<T> {
    Success(T),
    Failure(Vec<ResultMessage>),
}

impl<T> ServiceResult<T> {
    /// Successful result carrying `payload`
    pub fn success(payload: T) -> Self {
        ServiceResult::Success(payload)
    }

    /// Failed result with a single `Invalid` message
    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceResult::Failure(vec![ResultMessage::invalid(message)])
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResult::Success(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ServiceResult::Success(payload) => Some(payload),
            ServiceResult::Failure(_) => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            ServiceResult::Success(payload) => Some(payload),
            ServiceResult::Failure(_) => None,
        }
    }

    /// Messages in the order they were recorded (empty on success)
    pub fn messages(&self) -> &[ResultMessage] {
        match self {
            ServiceResult::Success(_) => &[],
            ServiceResult::Failure(messages) => messages,
        }
    }

    /// Transform the payload, keeping failure messages untouched
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ServiceResult::Success(payload) => ServiceResult::Success(f(payload)),
            ServiceResult::Failure(messages) => ServiceResult::Failure(messages),
        }
    }
}

// Flattened wire shape: { success, payload, messages }
impl<T: Serialize> Serialize for ServiceResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ServiceResult", 3)?;
        state.serialize_field("success", &self.is_success())?;
        state.serialize_field("payload", &self.payload())?;
        state.serialize_field("messages", self.messages())?;
        state.end()
    }
}

/// Accumulates rule violations for a single input.
///
/// Every check records its message; the caller turns the accumulator into a
/// result only once all checks have run.
#[derive(Debug, Default, Clone)]
pub struct Validation {
    messages: Vec<ResultMessage>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>, kind: ResultKind) {
        self.messages.push(ResultMessage::new(message, kind));
    }

    pub fn invalid(&mut self, message: impl Into<String>) {
        self.add(message, ResultKind::Invalid);
    }

    /// Record `message` when `failed` holds
    pub fn check(&mut self, failed: bool, message: &str) {
        if failed {
            self.invalid(message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ResultMessage] {
        &self.messages
    }

    /// Succeed with `payload` when no message was recorded, otherwise fail
    /// with every recorded message.
    pub fn finish<T>(self, payload: T) -> ServiceResult<T> {
        if self.messages.is_empty() {
            ServiceResult::Success(payload)
        } else {
            ServiceResult::Failure(self.messages)
        }
    }
}
