// src/notice.rs
// The constant content of the service. While the real chatbot backend is
// offline, every chat message receives the same staging notice.

pub const VERSION: &str = "1.0.0-staging";

pub const STAGING_NOTICE: &str = "\
⚠️ CHATBOT IS IN STAGING MODE ⚠️
This chatbot service is currently running as a staging placeholder.

Automated replies are disabled while the production backend is offline.
Please check back later, or contact the site operator if you need assistance.";

/// Flat mapping from any user message to the staging notice. The input is
/// ignored on purpose: staging mode replaces all chatbot logic with a
/// placeholder.
pub fn staging_reply(_user_message: &str) -> &'static str {
    STAGING_NOTICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_ignores_input() {
        assert_eq!(staging_reply("hello"), STAGING_NOTICE);
        assert_eq!(staging_reply(""), STAGING_NOTICE);
        assert_eq!(staging_reply("tell me about pricing"), STAGING_NOTICE);
    }
}
