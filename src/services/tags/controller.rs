//! Tag Generation Controller.
//!
//! Owns the per-product session state: per-locale generated tags and
//! descriptions, per-locale in-flight flags, the active locale, and the last
//! session error. At most one request may be in flight per locale; a
//! reentrant call is rejected with `AlreadyInFlight` rather than queued.
//! The two locales are independent: requests for different locales run
//! concurrently, and a failure in one never touches state held for the other.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::catalog::ProductRecord;
use crate::services::tags::client::TagService;
use crate::services::tags::model::{merge_group_set, GenerateRequest, TagGroupSet};
use crate::types::errors::{TagServiceError, TagServiceResult};
use crate::types::locale::Locale;

/// One value per supported locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerLocale<T> {
    pub us: T,
    pub jp: T,
}

impl<T> PerLocale<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Us => &self.us,
            Locale::Jp => &self.jp,
        }
    }

    pub fn get_mut(&mut self, locale: Locale) -> &mut T {
        match locale {
            Locale::Us => &mut self.us,
            Locale::Jp => &mut self.jp,
        }
    }
}

/// Generated tags and description for one locale. Once populated it persists
/// in memory until the controller is remounted on another product.
#[derive(Debug, Clone, Default)]
pub struct LocaleTagState {
    pub tags: Option<TagGroupSet>,
    pub description: Option<String>,
}

#[derive(Debug)]
struct Session {
    /// Bumped on every mount; responses carrying a stale value are dropped.
    mount_id: u64,
    product: ProductRecord,
    current_locale: Option<Locale>,
    locales: PerLocale<LocaleTagState>,
    in_flight: PerLocale<bool>,
    last_error: Option<String>,
}

impl Session {
    fn fresh(mount_id: u64, product: ProductRecord) -> Self {
        Self {
            mount_id,
            product,
            current_locale: None,
            locales: PerLocale::default(),
            in_flight: PerLocale::default(),
            last_error: None,
        }
    }
}

/// Read-only view for the presentation layer: the active locale's merged
/// tags and description plus the generation/error flags it needs to render.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub product_id: String,
    pub current_locale: Option<Locale>,
    pub generating: PerLocale<bool>,
    /// Tags for the active locale, when generated.
    pub tags: Option<TagGroupSet>,
    /// Active locale's generated description, falling back to the product's
    /// default description.
    pub description: String,
    pub error: Option<String>,
}

pub struct TagController {
    service: Arc<dyn TagService>,
    session: Mutex<Session>,
}

impl TagController {
    pub fn new(service: Arc<dyn TagService>, product: ProductRecord) -> Self {
        Self {
            service,
            session: Mutex::new(Session::fresh(0, product)),
        }
    }

    /// Mount the controller on a product. All locale tag state, the active
    /// locale, and the session error are discarded; selecting a different
    /// product is equivalent to a fresh mount. Responses still in flight for
    /// the previous mount will be dropped when they complete.
    pub async fn mount(&self, product: ProductRecord) {
        let mut session = self.session.lock().await;
        let mount_id = session.mount_id + 1;
        log::info!("Mounting product '{}'", product.id);
        *session = Session::fresh(mount_id, product);
    }

    /// Run one generation request for `locale`.
    ///
    /// Failures are absorbed into session state (`last_error`) and also
    /// returned so the immediate caller can display them; they never
    /// propagate further. On completion the locale's in-flight flag is
    /// cleared — unless the controller was remounted in the meantime, in
    /// which case the result is dropped and the current mount's flags are
    /// left alone.
    pub async fn request_tags(&self, locale: Locale) -> TagServiceResult<()> {
        let (request, product_id, mount_id) = {
            let mut session = self.session.lock().await;
            if *session.in_flight.get(locale) {
                log::debug!("Rejecting reentrant {locale} request");
                return Err(TagServiceError::AlreadyInFlight(locale));
            }
            *session.in_flight.get_mut(locale) = true;
            session.last_error = None;

            let request = GenerateRequest {
                image_url: session.product.image_url.clone(),
                location: locale,
                item: session.product.item_type.clone(),
            };
            (request, session.product.id.clone(), session.mount_id)
        };

        log::info!("Generating {locale} tags for product '{product_id}'");
        // Session lock is not held across the await: the other locale's
        // request proceeds concurrently.
        let result = self.service.generate(request).await;

        let mut session = self.session.lock().await;

        if session.mount_id != mount_id {
            // The user navigated away while the request was outstanding.
            // The in-flight flag must stay untouched: mount() already reset
            // this request's flag, and the current mount may have its own
            // request outstanding for the same locale.
            log::debug!("Dropping stale {locale} response for product '{product_id}'");
            return Ok(());
        }

        *session.in_flight.get_mut(locale) = false;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("{locale} tag generation failed: {e}");
                session.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        let description = response.description.clone();
        let Some(raw) = response.into_first_group_set() else {
            // Client validates this already; kept as a hard invariant here.
            let e = TagServiceError::MalformedPayload;
            session.last_error = Some(e.to_string());
            return Err(e);
        };

        let slot = session.locales.get_mut(locale);
        slot.tags = Some(merge_group_set(raw));
        slot.description = description;
        session.current_locale = Some(locale);
        log::info!("Stored {locale} tags for product '{product_id}'");
        Ok(())
    }

    /// Snapshot for rendering. Tags/description track the active locale.
    pub async fn snapshot(&self) -> ViewSnapshot {
        let session = self.session.lock().await;
        let active = session
            .current_locale
            .map(|locale| session.locales.get(locale));
        ViewSnapshot {
            product_id: session.product.id.clone(),
            current_locale: session.current_locale,
            generating: session.in_flight,
            tags: active.and_then(|state| state.tags.clone()),
            description: active
                .and_then(|state| state.description.clone())
                .unwrap_or_else(|| session.product.description.clone()),
            error: session.last_error.clone(),
        }
    }

    pub async fn current_locale(&self) -> Option<Locale> {
        self.session.lock().await.current_locale
    }

    pub async fn is_generating(&self, locale: Locale) -> bool {
        *self.session.lock().await.in_flight.get(locale)
    }

    /// Generated tags held for a locale, active or not.
    pub async fn tags_for(&self, locale: Locale) -> Option<TagGroupSet> {
        self.session.lock().await.locales.get(locale).tags.clone()
    }

    /// Generated description held for a locale, active or not.
    pub async fn description_for(&self, locale: Locale) -> Option<String> {
        self.session
            .lock()
            .await
            .locales
            .get(locale)
            .description
            .clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.session.lock().await.last_error.clone()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
