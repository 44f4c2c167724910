use teloxide::types::{ParseMode, UserId};
use teloxide::utils::html;

use crate::event::MessageEvent;

/// The sender attributes replies are allowed to use.
#[derive(Debug, Clone)]
pub struct Sender {
    pub id: UserId,
    pub first_name: String,
}

/// One outbound reply: the text plus the parse mode it must be sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }
}

const HELP_TEXT: &str = "🤖 *Bot Commands:*\n\n\
                         /start - Start the bot and see welcome message\n\
                         /help - Show this help message\n\n\
                         *Other features:*\n\
                         • Send me any text message and I'll echo it back\n\
                         • Send me photos, stickers, or other media and I'll respond\n\n\
                         Just start typing to try it out!";

const PHOTO_REPLY: &str = "Nice photo! 📸 I can see you sent me an image.";
const STICKER_REPLY: &str = "Cool sticker! 😄";

/// Route one classified event to its reply. `None` means the update is
/// dropped without an answer (unknown commands, unsupported media).
pub fn reply_for(event: &MessageEvent, sender: &Sender) -> Option<Reply> {
    match event {
        MessageEvent::Command(name) => match name.as_str() {
            "start" => Some(start_reply(sender)),
            "help" => Some(help_reply()),
            _ => None,
        },
        MessageEvent::Text(text) => Some(echo_reply(sender, text)),
        MessageEvent::Photo => Some(Reply::plain(PHOTO_REPLY)),
        MessageEvent::Sticker => Some(Reply::plain(STICKER_REPLY)),
        MessageEvent::Other => None,
    }
}

/// Greeting for `/start`, with an inline mention of the sender.
fn start_reply(sender: &Sender) -> Reply {
    let mention = format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        sender.id.0,
        html::escape(&sender.first_name)
    );
    Reply {
        text: format!(
            "Hi {mention}!\n\n\
             Welcome to this Telegram bot! 🤖\n\n\
             Here's what I can do:\n\
             • Send me any message and I'll echo it back\n\
             • Use /help to see available commands\n\n\
             Feel free to start chatting!"
        ),
        parse_mode: Some(ParseMode::Html),
    }
}

fn help_reply() -> Reply {
    Reply {
        text: HELP_TEXT.to_string(),
        parse_mode: Some(ParseMode::Markdown),
    }
}

fn echo_reply(sender: &Sender, text: &str) -> Reply {
    Reply::plain(format!("Hi {}! You said: '{}'", sender.first_name, text))
}
