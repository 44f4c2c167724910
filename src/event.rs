use teloxide::types::Message;

/// Content category of an inbound message, decided once at the decoding
/// boundary so the router can match exhaustively instead of probing the
/// raw update for attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    /// A `/command`, name lowercased with any `@botname` suffix removed.
    Command(String),
    /// Plain text that is not a command.
    Text(String),
    Photo,
    Sticker,
    /// Anything else (voice, video, documents, ...) — dropped by the router.
    Other,
}

impl MessageEvent {
    pub fn from_message(msg: &Message) -> Self {
        Self::classify(msg.text(), msg.photo().is_some(), msg.sticker().is_some())
    }

    /// Text (and therefore commands) wins over media kinds; Telegram never
    /// sets both, but the ordering here is what guarantees it.
    fn classify(text: Option<&str>, has_photo: bool, has_sticker: bool) -> Self {
        if let Some(text) = text {
            return match parse_command(text) {
                Some(name) => MessageEvent::Command(name),
                None => MessageEvent::Text(text.to_string()),
            };
        }
        if has_photo {
            return MessageEvent::Photo;
        }
        if has_sticker {
            return MessageEvent::Sticker;
        }
        MessageEvent::Other
    }
}

/// Extract a command name from message text: `/start`, `/start args`,
/// `/start@SomeBot`. Returns `None` for ordinary text. Command matching is
/// case-insensitive, so the name comes back lowercased.
fn parse_command(text: &str) -> Option<String> {
    let rest = text.strip_prefix('/')?;
    let token = rest.split(char::is_whitespace).next().unwrap_or("");
    let name = token.split('@').next().unwrap_or(token);
    Some(name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_classification() {
        assert_eq!(
            MessageEvent::classify(Some("/start"), false, false),
            MessageEvent::Command("start".to_string())
        );
        assert_eq!(
            MessageEvent::classify(Some("/help extra args"), false, false),
            MessageEvent::Command("help".to_string())
        );
    }

    #[test]
    fn test_command_is_case_insensitive() {
        assert_eq!(
            MessageEvent::classify(Some("/START"), false, false),
            MessageEvent::Command("start".to_string())
        );
    }

    #[test]
    fn test_bot_suffix_is_stripped() {
        assert_eq!(
            MessageEvent::classify(Some("/help@SomeBot"), false, false),
            MessageEvent::Command("help".to_string())
        );
    }

    #[test]
    fn test_bare_slash_is_an_empty_command() {
        // No handler matches it, so it is dropped downstream.
        assert_eq!(
            MessageEvent::classify(Some("/"), false, false),
            MessageEvent::Command(String::new())
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            MessageEvent::classify(Some("hello"), false, false),
            MessageEvent::Text("hello".to_string())
        );
    }

    #[test]
    fn test_text_wins_over_media_flags() {
        assert_eq!(
            MessageEvent::classify(Some("hello"), true, true),
            MessageEvent::Text("hello".to_string())
        );
    }

    #[test]
    fn test_photo_and_sticker() {
        assert_eq!(
            MessageEvent::classify(None, true, false),
            MessageEvent::Photo
        );
        assert_eq!(
            MessageEvent::classify(None, false, true),
            MessageEvent::Sticker
        );
    }

    #[test]
    fn test_everything_else_is_other() {
        assert_eq!(
            MessageEvent::classify(None, false, false),
            MessageEvent::Other
        );
    }
}
