//! Shared-secret credential.

/// Secret set when an account is opened.
///
/// The value cannot be read back: there is no accessor, no `Display`, no
/// `Serialize` and no `Clone`. The only question it answers is whether a
/// presented value is exactly the same (case-sensitive, no normalisation).
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn verify(&self, presented: &str) -> bool {
        self.0 == presented
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}
