//! Messaging deep links.

use std::fmt;

/// Link that opens a chat with a fixed recipient in an external messenger,
/// optionally with a pre-filled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    host: String,
    recipient: String,
    text: Option<String>,
}

impl DeepLink {
    pub fn new(host: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            recipient: recipient.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// `https://<host>/<recipient>?text=<percent-encoded text>`
    pub fn url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        match &self.text {
            Some(text) => format!(
                "https://{}/{}?text={}",
                host,
                self.recipient,
                urlencoding::encode(text)
            ),
            None => format!("https://{}/{}", host, self.recipient),
        }
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_chat_link() {
        let link = DeepLink::new("wa.me", "77474507959");
        assert_eq!(link.url(), "https://wa.me/77474507959");
    }

    #[test]
    fn test_text_is_percent_encoded() {
        let link = DeepLink::new("wa.me/", "77474507959").with_text("Итого: 6 000 ₸\n& more?");
        let url = link.url();

        assert!(url.starts_with("https://wa.me/77474507959?text="));
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
        assert!(!query.contains('?'));
        assert_eq!(
            urlencoding::decode(query).unwrap(),
            "Итого: 6 000 ₸\n& more?"
        );
    }
}
