use std::{fmt, sync::Arc, time::Duration};

use poise::serenity_prelude::{ComponentInteraction, UserId};
use strum_macros::EnumString;

/// Expiration applied to collectors when no time limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(60_000);

/// Predicate deciding whether an incoming component interaction is accepted.
pub type ComponentFilter = Arc<dyn Fn(&ComponentInteraction) -> bool + Send + Sync>;

/// Which collectors get attached to the anchor message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, strum_macros::Display)]
pub enum CollectorKind {
    /// Button clicks only.
    #[default]
    Button,
    /// String-select choices. A button collector is still attached.
    String,
    /// Button clicks and string-select choices.
    Both,
}

impl CollectorKind {
    /// Whether this kind asks for a string-select collector.
    pub fn wants_strings(self) -> bool {
        matches!(self, CollectorKind::String | CollectorKind::Both)
    }
}

/// How follow-up interactions are matched to their intended recipient.
#[derive(Clone)]
pub enum FilterWith {
    /// Accept interactions from this user only.
    UserId(UserId),
    /// Caller-supplied predicate, used verbatim.
    Custom(ComponentFilter),
}

impl fmt::Debug for FilterWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWith::UserId(id) => f.debug_tuple("UserId").field(id).finish(),
            FilterWith::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Collector selection and filtering for [`SpawnOptions`].
#[derive(Debug, Clone, Default)]
pub struct CollectorOptions {
    pub kind: CollectorKind,
    /// Defaults to matching on the invoking user's id.
    pub filter_with: Option<FilterWith>,
}

impl CollectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: CollectorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Accept follow-ups from `user` instead of the invoking user.
    pub fn filter_user(mut self, user: impl Into<UserId>) -> Self {
        self.filter_with = Some(FilterWith::UserId(user.into()));
        self
    }

    /// Accept follow-ups matching `filter` instead of matching on a user id.
    pub fn filter_with(
        mut self,
        filter: impl Fn(&ComponentInteraction) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter_with = Some(FilterWith::Custom(Arc::new(filter)));
        self
    }
}

/// Options accepted by [`spawn_collector`]. Every field has a default, so
/// `SpawnOptions::new()` alone spawns a button collector filtered on the
/// invoking user that expires after [`DEFAULT_TIME_LIMIT`].
///
/// [`spawn_collector`]: crate::spawn::spawn_collector
#[derive(Debug, Clone, Default)]
pub struct SpawnOptions {
    /// How long the collectors stay alive.
    pub time_limit: Option<Duration>,
    /// Overrides the ephemeral flag on the reply contents when set.
    pub ephemeral: Option<bool>,
    pub collectors: Option<CollectorOptions>,
}

impl SpawnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = Some(ephemeral);
        self
    }

    pub fn collectors(mut self, collectors: CollectorOptions) -> Self {
        self.collectors = Some(collectors);
        self
    }
}

/// Filter after resolution. Both collectors share one value through an [`Arc`].
pub(crate) enum ResolvedFilter {
    User(UserId),
    Custom(ComponentFilter),
}

impl ResolvedFilter {
    pub(crate) fn accepts(&self, interaction: &ComponentInteraction) -> bool {
        match self {
            ResolvedFilter::User(id) => interaction.user.id == *id,
            ResolvedFilter::Custom(filter) => filter(interaction),
        }
    }
}

/// [`SpawnOptions`] with every default applied. Built once per spawn so the
/// optional fields are not re-checked at each use site.
pub(crate) struct ResolvedOptions {
    pub(crate) filter: Arc<ResolvedFilter>,
    pub(crate) time_limit: Duration,
    pub(crate) kind: CollectorKind,
}

impl ResolvedOptions {
    pub(crate) fn new(options: &SpawnOptions, invoker: UserId) -> Self {
        let collectors = options.collectors.clone().unwrap_or_default();

        let filter = match collectors.filter_with {
            Some(FilterWith::Custom(filter)) => ResolvedFilter::Custom(filter),
            Some(FilterWith::UserId(id)) => ResolvedFilter::User(id),
            None => ResolvedFilter::User(invoker),
        };

        ResolvedOptions {
            filter: Arc::new(filter),
            time_limit: options.time_limit.unwrap_or(DEFAULT_TIME_LIMIT),
            kind: collectors.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_button_only_invoker_filter() {
        let resolved = ResolvedOptions::new(&SpawnOptions::new(), UserId::new(111));

        assert_eq!(resolved.kind, CollectorKind::Button);
        assert!(!resolved.kind.wants_strings());
        assert_eq!(resolved.time_limit, DEFAULT_TIME_LIMIT);
        assert!(matches!(&*resolved.filter, ResolvedFilter::User(id) if *id == UserId::new(111)));
    }

    #[test]
    fn string_and_both_request_the_select_collector() {
        assert!(!CollectorKind::Button.wants_strings());
        assert!(CollectorKind::String.wants_strings());
        assert!(CollectorKind::Both.wants_strings());
    }

    #[test]
    fn filter_user_overrides_the_invoker() {
        let options =
            SpawnOptions::new().collectors(CollectorOptions::new().filter_user(UserId::new(222)));

        let resolved = ResolvedOptions::new(&options, UserId::new(111));

        assert!(matches!(&*resolved.filter, ResolvedFilter::User(id) if *id == UserId::new(222)));
    }

    #[test]
    fn custom_predicate_survives_resolution_unchanged() {
        let predicate: ComponentFilter = Arc::new(|_| true);
        let options = SpawnOptions::new().collectors(CollectorOptions {
            kind: CollectorKind::Both,
            filter_with: Some(FilterWith::Custom(Arc::clone(&predicate))),
        });

        let resolved = ResolvedOptions::new(&options, UserId::new(111));

        match &*resolved.filter {
            ResolvedFilter::Custom(filter) => assert!(Arc::ptr_eq(filter, &predicate)),
            ResolvedFilter::User(_) => panic!("custom predicate was re-derived"),
        }
    }

    #[test]
    fn time_limit_replaces_the_default() {
        let options = SpawnOptions::new().time_limit(Duration::from_millis(5_000));

        let resolved = ResolvedOptions::new(&options, UserId::new(111));

        assert_eq!(resolved.time_limit, Duration::from_millis(5_000));
    }

    #[test]
    fn kind_parses_from_config_tokens() {
        assert_eq!("Button".parse(), Ok(CollectorKind::Button));
        assert_eq!("String".parse(), Ok(CollectorKind::String));
        assert_eq!("Both".parse(), Ok(CollectorKind::Both));
        assert!("Select".parse::<CollectorKind>().is_err());
    }
}
