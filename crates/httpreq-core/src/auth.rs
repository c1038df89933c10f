//! `Authorization` header construction.
//!
//! Two modes: `token <value>` and HTTP Basic. A token, when set, always wins.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
    basic: Option<(String, String)>,
}

impl Credentials {
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn set_basic(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.basic = Some((username.into(), password.into()));
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.basic = None;
    }

    /// Value for the `Authorization` header, or `None` when no credential is configured.
    pub fn header_value(&self) -> Option<String> {
        if let Some(token) = &self.token {
            return Some(format!("token {}", token));
        }
        self.basic.as_ref().map(|(user, pass)| {
            let encoded = STANDARD.encode(format!("{}:{}", user, pass).as_bytes());
            format!("Basic {}", encoded)
        })
    }
}
