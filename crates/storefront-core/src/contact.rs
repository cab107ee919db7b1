//! WhatsApp contact affordance.

use crate::error::ContactError;

/// Base URL of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// A validated WhatsApp contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppContact {
    digits: String,
    message: Option<String>,
}

impl WhatsAppContact {
    /// Keep only the digits of `phone` (`+62 812-3456` → `628123456`).
    pub fn new(phone: &str, message: Option<&str>) -> Result<Self, ContactError> {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(ContactError::EmptyNumber);
        }

        Ok(Self {
            digits,
            message: message
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        })
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Build the click-to-chat URL.
    ///
    /// `encode` percent-encodes the prefilled message; the browser build
    /// passes `encodeURIComponent`.
    pub fn link(&self, encode: impl FnOnce(&str) -> String) -> String {
        match &self.message {
            Some(message) => format!("{WHATSAPP_BASE}{}?text={}", self.digits, encode(message)),
            None => format!("{WHATSAPP_BASE}{}", self.digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        let contact = WhatsAppContact::new("+62 812-3456-7890", None).unwrap();
        assert_eq!(contact.digits(), "6281234567890");
        assert_eq!(contact.link(|s| s.to_string()), "https://wa.me/6281234567890");
    }

    #[test]
    fn test_empty_number_rejected() {
        assert_eq!(WhatsAppContact::new("", None), Err(ContactError::EmptyNumber));
        assert_eq!(
            WhatsAppContact::new("+ ( ) -", Some("hi")),
            Err(ContactError::EmptyNumber)
        );
    }

    #[test]
    fn test_message_is_encoded() {
        let contact = WhatsAppContact::new("628123", Some("  Hello there ")).unwrap();
        assert_eq!(contact.message(), Some("Hello there"));
        let link = contact.link(|s| s.replace(' ', "%20"));
        assert_eq!(link, "https://wa.me/628123?text=Hello%20there");
    }

    #[test]
    fn test_blank_message_dropped() {
        let contact = WhatsAppContact::new("628123", Some("   ")).unwrap();
        assert_eq!(contact.message(), None);
        assert_eq!(contact.link(|_| unreachable!()), "https://wa.me/628123");
    }
}
