use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// PBKDF2-HMAC-SHA256, fast enough to wait on.
    Interactive,
    /// Argon2id, memory-hard.
    Deep,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Interactive, Scheme::Deep];

    pub fn code(&self) -> &'static str {
        match self {
            Scheme::Interactive => "interactive",
            Scheme::Deep => "deep",
        }
    }

    pub fn algorithm(&self) -> &'static str {
        match self {
            Scheme::Interactive => "PBKDF2-HMAC-SHA256",
            Scheme::Deep => "Argon2id",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_algorithms() {
        assert_eq!(Scheme::Interactive.to_string(), "interactive");
        assert_eq!(Scheme::Interactive.algorithm(), "PBKDF2-HMAC-SHA256");
        assert_eq!(Scheme::Deep.to_string(), "deep");
        assert_eq!(Scheme::Deep.algorithm(), "Argon2id");
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Scheme::ALL).unwrap();
        assert_eq!(json, r#"["interactive","deep"]"#);
    }
}
