//! Reply-and-collect helpers for poise commands.
//!
//! [`spawn_collector`] sends a reply to the current command invocation and
//! attaches short-lived component-interaction collectors to the sent
//! message, filtered to the invoking user unless configured otherwise. The
//! collectors come back un-awaited; driving and stopping them is the
//! caller's business.
//!
//! ```no_run
//! use anchor_collector::{CollectorKind, CollectorOptions, SpawnOptions, spawn_collector};
//! # type Error = Box<dyn std::error::Error + Send + Sync>;
//! # type Context<'a> = poise::Context<'a, (), Error>;
//! async fn quiz(ctx: Context<'_>) -> Result<(), Error> {
//!     let spawned = spawn_collector(
//!         &ctx,
//!         poise::CreateReply::default().content("Pick an answer"),
//!         SpawnOptions::new().collectors(CollectorOptions::new().kind(CollectorKind::Both)),
//!     )
//!     .await?;
//!
//!     let click = spawned.buttons.await;
//! #   let _ = click;
//!     Ok(())
//! }
//! ```

pub mod message;
pub mod options;
pub mod spawn;

pub use message::send_message;
pub use options::{
    CollectorKind, CollectorOptions, ComponentFilter, DEFAULT_TIME_LIMIT, FilterWith, SpawnOptions,
};
pub use spawn::{SpawnedCollectors, spawn_collector};
