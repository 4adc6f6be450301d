use std::{error::Error as StdError, fmt};

const BODY_PREVIEW_LIMIT: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerHttpErrorKind {
    Timeout,
    Connect,
    Request,
    Body,
    Decode,
    Status,
    /// HTTP succeeded but the scheduler envelope carried a non-zero code.
    Api,
    Unknown,
}

impl SchedulerHttpErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Request => "request",
            Self::Body => "body",
            Self::Decode => "decode",
            Self::Status => "status",
            Self::Api => "api",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SchedulerHttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct SchedulerHttpError {
    kind: SchedulerHttpErrorKind,
    status: Option<u16>,
    api_code: Option<i64>,
    url: String,
    message: String,
    source: Option<anyhow::Error>,
}

impl SchedulerHttpError {
    pub fn kind(&self) -> SchedulerHttpErrorKind {
        self.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn api_code(&self) -> Option<i64> {
        self.api_code
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn from_reqwest(err: reqwest::Error, url: String) -> Self {
        let kind = if err.is_timeout() {
            SchedulerHttpErrorKind::Timeout
        } else if err.is_connect() {
            SchedulerHttpErrorKind::Connect
        } else if err.is_request() {
            SchedulerHttpErrorKind::Request
        } else if err.is_body() {
            SchedulerHttpErrorKind::Body
        } else if err.is_decode() {
            SchedulerHttpErrorKind::Decode
        } else {
            SchedulerHttpErrorKind::Unknown
        };
        Self {
            kind,
            status: err.status().map(|s| s.as_u16()),
            api_code: None,
            url,
            message: err.to_string(),
            source: Some(anyhow::Error::new(err)),
        }
    }

    pub(crate) fn status_error(status: u16, url: String, body: &str) -> Self {
        Self {
            kind: SchedulerHttpErrorKind::Status,
            status: Some(status),
            api_code: None,
            url,
            message: preview_body(body),
            source: None,
        }
    }

    pub(crate) fn decode_error(status: u16, url: String, err: serde_json::Error, body: &str) -> Self {
        Self {
            kind: SchedulerHttpErrorKind::Decode,
            status: Some(status),
            api_code: None,
            url,
            message: format!(
                "failed to decode response body: {} | body={}",
                err,
                preview_body(body)
            ),
            source: Some(anyhow::Error::new(err)),
        }
    }

    pub(crate) fn api_error(code: i64, msg: String, url: String) -> Self {
        Self {
            kind: SchedulerHttpErrorKind::Api,
            status: None,
            api_code: Some(code),
            url,
            message: msg,
            source: None,
        }
    }
}

impl fmt::Display for SchedulerHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheduler http error kind={}", self.kind)?;
        if let Some(status) = self.status {
            write!(f, " status={}", status)?;
        }
        if let Some(code) = self.api_code {
            write!(f, " code={}", code)?;
        }
        write!(f, " url={}: {}", self.url, self.message)
    }
}

impl StdError for SchedulerHttpError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}

fn preview_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }
    match trimmed.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((end, _)) => format!("{}...", &trimmed[..end]),
        None => trimmed.to_string(),
    }
}
