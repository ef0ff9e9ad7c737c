use tracing::{debug, warn};

use crate::{dom::ClassList, model::ConsentFlag, storage::KeyValueStore};

use super::HIDDEN_CLASS;

pub const CONSENT_KEY: &str = "cookieConsent";

/// Cookie banner with accept and reject controls.
#[derive(Debug)]
pub struct ConsentBanner<E: ClassList, S: KeyValueStore> {
    banner: E,
    store: S,
}

impl<E: ClassList, S: KeyValueStore> ConsentBanner<E, S> {
    pub fn new(banner: E, store: S) -> Self {
        Self { banner, store }
    }

    /// Hide the banner if a decision was stored on an earlier visit.
    pub fn on_load(&mut self) {
        if let Some(value) = self.store.get_item(CONSENT_KEY).filter(|v| !v.is_empty()) {
            debug!(%value, "consent already recorded, hiding banner");
            self.banner.add_class(HIDDEN_CLASS);
        }
    }

    pub fn accept(&mut self) {
        self.decide(ConsentFlag::Accepted);
    }

    pub fn reject(&mut self) {
        self.decide(ConsentFlag::Rejected);
    }

    fn decide(&mut self, flag: ConsentFlag) {
        if let Err(err) = self.store.set_item(CONSENT_KEY, flag.as_str()) {
            warn!(error = %format!("{err:#}"), %flag, "failed to persist cookie consent");
        }
        self.banner.add_class(HIDDEN_CLASS);
    }

    pub fn is_visible(&self) -> bool {
        !self.banner.has_class(HIDDEN_CLASS)
    }

    /// The stored decision, if it is one this banner writes.
    pub fn recorded(&self) -> Option<ConsentFlag> {
        self.store
            .get_item(CONSENT_KEY)
            .and_then(|v| ConsentFlag::try_from(v.as_str()).ok())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
