use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::event::MessageEvent;
use crate::replies::{self, Sender};

/// Telegram caps messages at 4096 chars; stay under it with some headroom.
const MAX_MESSAGE_LEN: usize = 4000;

/// Start the Telegram bot and block until the process is terminated.
pub async fn run(config: Arc<Config>) -> Result<()> {
    let bot = Bot::new(&config.bot_token);

    info!("Starting Telegram bot...");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling an update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let user = match msg.from.as_ref() {
        Some(user) => user,
        None => return Ok(()),
    };

    let sender = Sender {
        id: user.id,
        first_name: user.first_name.clone(),
    };

    let event = MessageEvent::from_message(&msg);
    info!(
        "Update from {} ({}): {:?}",
        sender.first_name, sender.id.0, event
    );

    let reply = match replies::reply_for(&event, &sender) {
        Some(reply) => reply,
        None => return Ok(()),
    };

    for chunk in split_message(&reply.text, MAX_MESSAGE_LEN) {
        let request = bot.send_message(msg.chat.id, chunk);
        match reply.parse_mode {
            Some(mode) => request.parse_mode(mode).await?,
            None => request.await?,
        };
    }

    Ok(())
}

/// Split long replies for Telegram's message length limit, preferring
/// newline/space split points and never cutting inside a UTF-8 char.
fn split_message(text: &str, max_len: usize) -> Vec<String> {
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_len).min(text.len());
        while end > start && !text.is_char_boundary(end) {
            end -= 1;
        }
        let actual_end = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .or_else(|| text[start..end].rfind(' '))
                .map(|pos| start + pos + 1)
                .unwrap_or(end)
        } else {
            end
        };

        chunks.push(text[start..actual_end].to_string());
        start = actual_end;
    }

    chunks
}
