//! Backend-to-UI events and error classification.

pub enum UiEvent {
    Info(String),
    GreetingReceived {
        url: String,
        body: serde_json::Value,
    },
    GreetingFailed(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Greeting,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("decoding")
            || message_lower.contains("decode")
            || message_lower.contains("expected value")
            || message_lower.contains("invalid json")
        {
            UiErrorCategory::Decode
        } else if message_lower.contains("connect")
            || message_lower.contains("connection")
            || message_lower.contains("timed out")
            || message_lower.contains("timeout")
            || message_lower.contains("dns")
            || message_lower.contains("sending request")
            || message_lower.contains("status")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_fetch(error: &reqwest::Error) -> Self {
        let category = if error.is_decode() {
            UiErrorCategory::Decode
        } else if error.is_connect()
            || error.is_timeout()
            || error.is_request()
            || error.is_status()
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context: UiErrorContext::Greeting,
            message: error.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
