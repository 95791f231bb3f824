//! Validated text types shared by the proxy and the client form.
//!
//! Both fields the proxy accepts (`word` and `apiKey`) only need a presence check, so
//! the types here do no more than reject blank input and keep secrets out of logs.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// Returns `Err(TextError::Empty)` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Builds a `NonEmptyText` from an optional field, treating `None` as empty.
    pub fn from_optional(input: Option<&str>) -> Result<Self, TextError> {
        Self::new(input.unwrap_or_default())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A caller-supplied generation API key.
///
/// The key is passed through to the generation API on every request and is never stored.
/// `Debug` is redacted so the key cannot leak through `tracing` fields or error dumps.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(NonEmptyText);

impl ApiKey {
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        NonEmptyText::new(input).map(Self)
    }

    pub fn from_optional(input: Option<&str>) -> Result<Self, TextError> {
        NonEmptyText::from_optional(input).map(Self)
    }

    /// Returns the raw key. Only call this when building the outbound request.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_input() {
        let text = NonEmptyText::new("  courage \n").expect("should accept padded text");
        assert_eq!(text.as_str(), "courage");
    }

    #[test]
    fn test_non_empty_text_rejects_blank_input() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new("   \t"), Err(TextError::Empty));
        assert_eq!(NonEmptyText::from_optional(None), Err(TextError::Empty));
    }

    #[test]
    fn test_non_empty_text_deserialize_rejects_empty() {
        let result: Result<NonEmptyText, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let ok: NonEmptyText = serde_json::from_str("\"hope\"").expect("should deserialize");
        assert_eq!(ok.as_str(), "hope");
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-secret").expect("should accept key");
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains("secret"));
        assert_eq!(key.expose(), "AIza-secret");
    }
}
