//! Validated input types shared across the clinipass crates.
//!
//! Patient codes and bearer tokens both arrive from outside the core
//! (keyboard entry, NFC tag reads, login responses), so they are wrapped
//! in types that guarantee usable content once constructed.

/// Reasons a patient code cannot be used as a lookup key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PatientCodeError {
    /// The code was empty or contained only whitespace
    #[error("patient code cannot be empty")]
    Empty,
    /// The code contained interior whitespace or control characters
    #[error("patient code must be a single token")]
    NotAToken,
}

/// A patient identification code (or NNI), the lookup key for a record.
///
/// Codes reach the app from two sources with different failure modes:
/// typed entry (stray surrounding spaces) and NFC tag reads (whatever a
/// foreign writer put on the tag). Construction trims the surroundings
/// and rejects anything that is not a single token, so a scanned code
/// and a typed one compare equal and a tag carrying free text instead of
/// a code is refused before it reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientCode(String);

impl PatientCode {
    /// Creates a new `PatientCode` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`PatientCodeError::Empty`] if nothing is left after
    /// trimming, and [`PatientCodeError::NotAToken`] if the trimmed
    /// code contains interior whitespace or control characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, PatientCodeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PatientCodeError::Empty);
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(PatientCodeError::NotAToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PatientCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientCode::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when wrapping a token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token was empty or contained only whitespace
    #[error("token cannot be empty")]
    Empty,
}

/// An opaque bearer token proving an authenticated session.
///
/// Issued by the login endpoint and sent back on every authenticated
/// call. The token is never interpreted, only transported.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new `AuthToken`, rejecting empty or whitespace-only
    /// input.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TokenError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the raw token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens are credentials; keep them out of debug output.
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

impl serde::Serialize for AuthToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for AuthToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AuthToken::new(&s).map_err(serde::de::Error::custom)
    }
}
