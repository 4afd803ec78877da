use std::fmt;

use warenbuchung_webclient::{self as webclient, Credential, LoginResponse};

/// Why a single login attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The HTTP request itself failed (connection refused, broken body, ...).
    Transport,

    /// The response body is not JSON.
    Decode,

    /// The response is a JSON object without `token`.
    NoToken,

    /// Anything else. Carries the message shown to the user.
    Unexpected(String),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FailureKind::*;
        match self {
            Transport => f.write_str("curl error"),
            Decode => f.write_str("invalid response"),
            NoToken => f.write_str("no token"),
            Unexpected(msg) => f.write_str(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verdict {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success { locations: Vec<String> },
    Failure(FailureKind),
}

impl ProbeOutcome {
    /// Classify the result of `AuthService::login`.
    pub fn classify(login_result: webclient::Result<String>) -> Self {
        use webclient::Error;

        let body = match login_result {
            Ok(body) => body,
            Err(Error::Http(e)) => {
                log::debug!("Transport error: {}", e);
                return Self::Failure(FailureKind::Transport);
            }
            Err(e) => return Self::Failure(FailureKind::Unexpected(e.to_string())),
        };

        match LoginResponse::from_body(&body) {
            Ok(LoginResponse::Authenticated { locations }) => Self::Success { locations },
            Ok(LoginResponse::Rejected) => Self::Failure(FailureKind::NoToken),
            Err(Error::Json(e)) => {
                log::debug!("Response is not JSON ({}): {:?}", e, body);
                Self::Failure(FailureKind::Decode)
            }
            Err(e) => Self::Failure(FailureKind::Unexpected(e.to_string())),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Success { .. } => Verdict::Success,
            Self::Failure(_) => Verdict::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.verdict() == Verdict::Success
    }
}

/// Outcome of every credential in a probe run, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub entries: Vec<(Credential, ProbeOutcome)>,
}

impl ProbeReport {
    pub fn push(&mut self, cred: Credential, outcome: ProbeOutcome) {
        self.entries.push((cred, outcome));
    }

    pub fn num_total(&self) -> usize {
        self.entries.len()
    }

    pub fn num_passed(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.num_total() - self.num_passed()
    }

    pub fn all_passed(&self) -> bool {
        self.num_failed() == 0
    }
}
