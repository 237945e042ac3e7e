//! Discord event handler wiring triage, history, and the completion relay.

use crate::{
    chunk::chunk_reply,
    config::BotConfig,
    trigger::{should_react, strip_mention},
};
use compact_str::CompactString;
use llm::{CompletionError, Completions, Config};
use ncore::{Exchange, HistoryStore};
use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

/// Fixed notice relayed when the completion endpoint fails.
pub const OFFLINE_NOTICE: &str = "Error: the bot is currently offline.";

/// The relay event handler.
///
/// Owns the history store for the process lifetime; serenity shares one
/// handler instance across all event tasks.
pub struct Handler {
    store: HistoryStore,
    completions: Completions,
    chat: Config,
    name: CompactString,
    wake_word: String,
}

impl Handler {
    /// Create a handler from loaded configuration.
    pub fn new(completions: Completions, config: &BotConfig) -> Self {
        let chat = Config::new(&config.llm.model).system(&config.llm.system_prompt);
        Self {
            store: HistoryStore::new(),
            completions,
            chat,
            name: config.bot.name.clone(),
            wake_word: config.bot.wake_word.clone(),
        }
    }

    /// Handle one triggering message end to end.
    async fn respond(&self, ctx: &Context, msg: &Message, bot_id: u64) -> anyhow::Result<()> {
        if let Err(e) = msg.channel_id.broadcast_typing(&ctx.http).await {
            tracing::debug!("failed to broadcast typing: {e}");
        }

        let content = strip_mention(&msg.content, bot_id);
        // One history per guild, or per channel for DMs.
        let conversation: CompactString = match msg.guild_id {
            Some(guild) => guild.to_string().into(),
            None => msg.channel_id.to_string().into(),
        };

        self.store
            .push(conversation.clone(), Exchange::user(display_name(msg), content));
        let history = self.store.snapshot(&conversation);

        let outcome = self.completions.complete(&self.chat, &history).await;
        for reply in record_outcome(&self.store, &conversation, &self.name, outcome) {
            msg.reply(&ctx.http, reply).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("connected to discord as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user().id;
        let automated = msg.author.bot || msg.author.id == bot_id;
        let mentions_bot = msg.mentions_user_id(bot_id);
        if !should_react(&msg.content, automated, mentions_bot, &self.wake_word) {
            return;
        }

        // The handler is the failure boundary: nothing past this point
        // may take down the event loop. Any failure out of respond()
        // surfaces to the user as the one generic notice, best-effort
        // and one attempt only.
        if let Err(e) = self.respond(&ctx, &msg, bot_id.get()).await {
            tracing::error!("failed to deliver reply: {e}");
            if let Err(e) = msg.reply(&ctx.http, OFFLINE_NOTICE).await {
                tracing::debug!("failed to deliver failure notice: {e}");
            }
        }
    }
}

/// Record a completion outcome and produce the replies to send, in order.
///
/// Success appends the assistant turn under the bot's name and chunks the
/// text for the length limit; failure leaves the history untouched past
/// the user turn and yields the generic offline notice.
pub fn record_outcome(
    store: &HistoryStore,
    conversation: &str,
    bot_name: &CompactString,
    outcome: Result<String, CompletionError>,
) -> Vec<String> {
    match outcome {
        Ok(text) => {
            store.push(conversation, Exchange::assistant(bot_name.clone(), text.clone()));
            chunk_reply(&text)
        }
        Err(e) => {
            tracing::error!("completion failed: {e}");
            vec![OFFLINE_NOTICE.to_owned()]
        }
    }
}

/// Best-effort display name: guild nickname, then global name, then the
/// account username.
fn display_name(msg: &Message) -> CompactString {
    msg.member
        .as_ref()
        .and_then(|member| member.nick.as_deref())
        .or(msg.author.global_name.as_deref())
        .unwrap_or(&msg.author.name)
        .into()
}
