use std::sync::Arc;

use poise::{
    CreateReply,
    serenity_prelude::{
        self as serenity, ComponentInteractionCollector, ComponentInteractionDataKind, Message,
    },
};
use tracing::debug;

use crate::{
    message,
    options::{ResolvedOptions, SpawnOptions},
};

/// Anchor message and live collector handles returned by [`spawn_collector`].
///
/// The caller owns everything here: await a collector for its first match,
/// consume it with [`stream`], or drop it to stop collecting early.
///
/// [`stream`]: ComponentInteractionCollector::stream
pub struct SpawnedCollectors {
    pub anchor_msg: Message,
    /// Collects button clicks. Always present.
    pub buttons: ComponentInteractionCollector,
    /// Collects string-select choices. Present only for [`String`] and
    /// [`Both`] collector kinds.
    ///
    /// [`String`]: crate::options::CollectorKind::String
    /// [`Both`]: crate::options::CollectorKind::Both
    pub strings: Option<ComponentInteractionCollector>,
}

/// Sends a reply to the interaction behind `ctx` and attaches the component
/// collectors requested by `options` to the resulting message.
///
/// A button collector is always attached; a string-select collector only
/// when asked for. When both exist they share one filter (the invoking user
/// unless configured otherwise) and one expiration.
///
/// # Errors
/// Fails if the reply cannot be sent or resolved into a message. Errors are
/// serenity's, surfaced unchanged.
pub async fn spawn_collector<U, E>(
    ctx: &poise::Context<'_, U, E>,
    contents: CreateReply,
    options: SpawnOptions,
) -> Result<SpawnedCollectors, serenity::Error>
where
    U: Send + Sync + 'static,
{
    let anchor_msg = message::send_message(ctx, contents, &options).await?;

    let resolved = ResolvedOptions::new(&options, ctx.author().id);
    debug!(
        anchor_msg = %anchor_msg.id,
        kind = %resolved.kind,
        time_limit = ?resolved.time_limit,
        "attaching component collectors"
    );

    let (buttons, strings) = create_component_collectors(ctx, &anchor_msg, &resolved);

    Ok(SpawnedCollectors {
        anchor_msg,
        buttons,
        strings,
    })
}

/// Creates the collectors requested by `resolved`, scoped to `anchor_msg`.
fn create_component_collectors<U, E>(
    ctx: &poise::Context<'_, U, E>,
    anchor_msg: &Message,
    resolved: &ResolvedOptions,
) -> (
    ComponentInteractionCollector,
    Option<ComponentInteractionCollector>,
) {
    let buttons = component_collector(ctx, anchor_msg, resolved, is_button);

    let strings = resolved
        .kind
        .wants_strings()
        .then(|| component_collector(ctx, anchor_msg, resolved, is_string_select));

    (buttons, strings)
}

fn component_collector<U, E>(
    ctx: &poise::Context<'_, U, E>,
    anchor_msg: &Message,
    resolved: &ResolvedOptions,
    wanted: fn(&ComponentInteractionDataKind) -> bool,
) -> ComponentInteractionCollector {
    let filter = Arc::clone(&resolved.filter);

    ComponentInteractionCollector::new(ctx)
        .message_id(anchor_msg.id)
        .timeout(resolved.time_limit)
        .filter(move |mci| wanted(&mci.data.kind) && filter.accepts(mci))
}

fn is_button(kind: &ComponentInteractionDataKind) -> bool {
    matches!(kind, ComponentInteractionDataKind::Button)
}

fn is_string_select(kind: &ComponentInteractionDataKind) -> bool {
    matches!(kind, ComponentInteractionDataKind::StringSelect { .. })
}
