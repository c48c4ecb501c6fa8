//! Backend trait and the ordered fallback chain

use crate::types::DecodeError;

/// Text produced by one backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub pages: Option<usize>,
    pub paragraphs: Option<usize>,
}

impl DecodedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages = Some(pages);
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: usize) -> Self {
        self.paragraphs = Some(paragraphs);
        self
    }
}

/// A single decoding strategy
pub trait DocumentBackend: Send + Sync {
    /// Backend identifier
    fn name(&self) -> &'static str;

    /// Attempt decoding
    fn decode(&self, data: &[u8]) -> Result<DecodedText, DecodeError>;
}

/// Backends tried in order; the first success wins
pub struct BackendChain {
    backends: Vec<Box<dyn DocumentBackend>>,
}

impl BackendChain {
    pub fn new(backends: Vec<Box<dyn DocumentBackend>>) -> Self {
        Self { backends }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Returns the decoded text and the name of the backend that produced it,
    /// or the last backend's error when all of them fail
    pub fn decode(&self, data: &[u8]) -> Result<(DecodedText, &'static str), DecodeError> {
        let mut last_error = DecodeError::NoBackend;

        for backend in &self.backends {
            match backend.decode(data) {
                Ok(decoded) => return Ok((decoded, backend.name())),
                Err(err) => {
                    tracing::warn!(backend = backend.name(), error = %err, "decoder backend failed");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing(&'static str);
    struct Fixed(&'static str, &'static str);

    impl DocumentBackend for Failing {
        fn name(&self) -> &'static str {
            self.0
        }

        fn decode(&self, _data: &[u8]) -> Result<DecodedText, DecodeError> {
            Err(DecodeError::Pdf(format!("{} broke", self.0)))
        }
    }

    impl DocumentBackend for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn decode(&self, _data: &[u8]) -> Result<DecodedText, DecodeError> {
            Ok(DecodedText::new(self.1))
        }
    }

    #[test]
    fn test_first_success_wins() {
        let chain = BackendChain::new(vec![
            Box::new(Failing("a")),
            Box::new(Fixed("b", "from b")),
            Box::new(Fixed("c", "from c")),
        ]);
        let (decoded, backend) = chain.decode(b"").unwrap();
        assert_eq!(backend, "b");
        assert_eq!(decoded.text, "from b");
    }

    #[test]
    fn test_last_error_is_returned() {
        let chain = BackendChain::new(vec![Box::new(Failing("a")), Box::new(Failing("b"))]);
        let err = chain.decode(b"").unwrap_err();
        assert_eq!(err.to_string(), "PDF extraction failed: b broke");
    }

    #[test]
    fn test_empty_chain_reports_no_backend() {
        let chain = BackendChain::new(Vec::new());
        assert!(matches!(chain.decode(b""), Err(DecodeError::NoBackend)));
        assert!(chain.names().is_empty());
    }
}
