use poise::{
    CreateReply,
    serenity_prelude::{self as serenity, Message},
};

use crate::options::SpawnOptions;

/// Sends the reply for the current invocation and resolves it into the
/// concrete [`Message`] collectors can anchor to.
///
/// The base message options carried by `options` (currently the `ephemeral`
/// override) are applied on top of `contents` before sending.
///
/// # Errors
/// Fails if the reply cannot be sent or fetched back. Errors are serenity's,
/// surfaced unchanged.
pub async fn send_message<U, E>(
    ctx: &poise::Context<'_, U, E>,
    contents: CreateReply,
    options: &SpawnOptions,
) -> Result<Message, serenity::Error>
where
    U: Send + Sync + 'static,
{
    let mut contents = contents;
    if let Some(ephemeral) = options.ephemeral {
        contents = contents.ephemeral(ephemeral);
    }

    ctx.send(contents).await?.into_message().await
}
