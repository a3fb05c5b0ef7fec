//! Resource controllers: fetch a collection, cache it, render it, filter it
//! locally, and run create/delete mutations followed by a full reload.
//!
//! The five resources differ only in endpoint, read auth, columns, and which
//! gated actions they offer, so one generic [`ResourceController`] is
//! instantiated per [`Resource`] marker type.

mod courses;
mod grades;
mod packs;
mod preferences;
mod students;

pub use courses::Courses;
pub use grades::{Grades, student_codes};
pub use packs::Packs;
pub use preferences::{Preferences, StudentOption, student_options};
pub use students::{Students, matches_search};

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pref_core::capabilities::{Action, allowed};
use pref_core::sanitize::display_text;
use pref_core::{CoreError, Role};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest, check_response};
use crate::screen::{NoticeKind, Screen, Section, Slot, Ticket, View};

/// Static description of one backend collection.
pub trait Resource: Send + Sync + 'static {
    type Item: DeserializeOwned + Serialize + Clone + Send + Sync;

    const SECTION: Section;
    /// Collection path under the API root, e.g. `/students`.
    const PATH: &'static str;
    /// Whether reads send the bearer token.
    const READ_AUTH: bool;
    /// Lower-case singular used in messages ("student").
    const NOUN: &'static str;
    /// Capitalised singular ("Student").
    const TITLE: &'static str;
    /// Lower-case plural ("students").
    const PLURAL: &'static str;
    /// Shown instead of a table when the collection is empty.
    const PLACEHOLDER: &'static str;
    const HEADERS: &'static [&'static str];
    /// Gated actions this view can offer.
    const ACTIONS: &'static [Action] = &[];

    fn id(item: &Self::Item) -> Option<i64>;

    /// Display cells in `HEADERS` order. Sanitising happens in the controller.
    fn row(item: &Self::Item) -> Vec<String>;
}

/// A resource with create/delete endpoints.
pub trait Mutable: Resource {
    type Draft: Serialize + Send + Sync;

    const CONFIRM_PROMPT: &'static str;

    /// Local checks before the POST.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a draft that cannot be sent.
    fn validate(draft: &Self::Draft) -> Result<(), CoreError>;
}

/// Asks the user before a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Fixed answer, for non-interactive runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveOutcome {
    /// The prompt was declined; nothing was sent.
    Declined,
    Removed,
}

/// Pure rendering of a collection: a placeholder or a table, plus the
/// gated actions offered to the current role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    pub placeholder: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub ids: Vec<Option<i64>>,
    pub actions: Vec<Action>,
}

impl RenderedList {
    #[must_use]
    pub fn offers(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render `items` for `role`. Every cell goes through [`display_text`].
#[must_use]
pub fn render_list<R: Resource>(items: &[R::Item], role: Option<Role>) -> RenderedList {
    let actions = R::ACTIONS
        .iter()
        .copied()
        .filter(|action| allowed(role, *action))
        .collect();

    if items.is_empty() {
        return RenderedList {
            placeholder: Some(R::PLACEHOLDER.to_string()),
            headers: Vec::new(),
            rows: Vec::new(),
            ids: Vec::new(),
            actions,
        };
    }

    RenderedList {
        placeholder: None,
        headers: R::HEADERS.iter().map(|h| (*h).to_string()).collect(),
        rows: items
            .iter()
            .map(|item| {
                R::row(item)
                    .iter()
                    .map(|cell| display_text(cell).into_owned())
                    .collect()
            })
            .collect(),
        ids: items.iter().map(R::id).collect(),
        actions,
    }
}

/// Load/render/filter/mutate unit for one resource.
pub struct ResourceController<R: Resource> {
    client: ApiClient,
    screen: Arc<Screen>,
    cache: Mutex<Vec<R::Item>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceController<R> {
    #[must_use]
    pub fn new(client: ApiClient, screen: Arc<Screen>) -> Self {
        Self {
            client,
            screen,
            cache: Mutex::new(Vec::new()),
            _resource: PhantomData,
        }
    }

    /// Last successfully loaded collection.
    #[must_use]
    pub fn items(&self) -> Vec<R::Item> {
        self.lock().clone()
    }

    /// GET the collection without touching cache or screen.
    ///
    /// # Errors
    ///
    /// `Transport`, `Status`, or `Decode`.
    pub async fn fetch(&self) -> Result<Vec<R::Item>, ApiError> {
        self.client
            .get_json(ApiRequest::get(R::PATH).authenticated(R::READ_AUTH))
            .await
    }

    /// Fetch, replace the cache, render.
    ///
    /// On failure the previous cache is kept and an error notice is shown.
    /// The cache is replaced even when the section changed meanwhile; only
    /// the view write is dropped then.
    ///
    /// # Errors
    ///
    /// The fetch error, after it was shown as a notice.
    pub async fn load(&self) -> Result<usize, ApiError> {
        let ticket = self.screen.ticket(R::SECTION);
        match self.fetch().await {
            Ok(items) => {
                let count = items.len();
                let view = self.render(&items);
                *self.lock() = items;
                self.screen.render(ticket, Slot::List, View::List(view));
                tracing::debug!(resource = R::PLURAL, count, "collection loaded");
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(resource = R::PLURAL, %error, "failed to load collection");
                let fallback = format!("Failed to load {}", R::PLURAL);
                self.screen.notify(ticket, NoticeKind::Error, error.notice_generic(&fallback));
                Err(error)
            }
        }
    }

    /// Pure view of `items` for the current role.
    #[must_use]
    pub fn render(&self, items: &[R::Item]) -> RenderedList {
        render_list::<R>(items, self.client.session().role())
    }

    /// Render the cached items matching `predicate`. No request is made.
    pub fn filter<P>(&self, predicate: P) -> RenderedList
    where
        P: Fn(&R::Item) -> bool,
    {
        let subset: Vec<R::Item> = self
            .lock()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        self.show_subset(self.screen.ticket(R::SECTION), &subset)
    }

    /// Render `items` into the list slot under `ticket`, leaving the cache
    /// alone. A stale ticket drops the write but still returns the view.
    pub(crate) fn show_subset(&self, ticket: Ticket, items: &[R::Item]) -> RenderedList {
        let view = self.render(items);
        self.screen.render(ticket, Slot::List, View::List(view.clone()));
        view
    }

    pub(crate) const fn client(&self) -> &ApiClient {
        &self.client
    }

    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }

    fn lock(&self) -> MutexGuard<'_, Vec<R::Item>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Mutable> ResourceController<R> {
    /// POST `draft`, show the outcome, then reload.
    ///
    /// A draft rejected locally sends nothing and does not reload.
    ///
    /// # Errors
    ///
    /// `Validation`, `Transport`, or `Status` from the POST.
    pub async fn create(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let ticket = self.screen.ticket(R::SECTION);
        if let Err(error) = R::validate(draft) {
            let error = ApiError::from(error);
            self.screen.notify(ticket, NoticeKind::Error, error.notice_text(""));
            return Err(error);
        }

        let outcome = self.post(draft).await;
        match &outcome {
            Ok(()) => {
                tracing::info!(resource = R::PLURAL, "created");
                self.screen.notify(
                    ticket,
                    NoticeKind::Success,
                    format!("{} added successfully!", R::TITLE),
                );
            }
            Err(error) => {
                tracing::warn!(resource = R::PLURAL, %error, "create failed");
                let fallback = format!("Failed to add {}", R::NOUN);
                self.screen.notify(ticket, NoticeKind::Error, error.notice_text(&fallback));
            }
        }

        self.reload().await;
        outcome
    }

    /// Ask `confirm`, DELETE, show the outcome, then reload.
    ///
    /// # Errors
    ///
    /// `Transport` or `Status` from the DELETE.
    pub async fn remove(&self, id: i64, confirm: &dyn Confirm) -> Result<RemoveOutcome, ApiError> {
        if !confirm.confirm(R::CONFIRM_PROMPT) {
            tracing::debug!(resource = R::PLURAL, id, "delete declined");
            return Ok(RemoveOutcome::Declined);
        }

        let ticket = self.screen.ticket(R::SECTION);
        let request = ApiRequest::delete(format!("{}/{id}", R::PATH)).authenticated(true);
        let outcome = self
            .client
            .request(request)
            .await
            .and_then(check_response)
            .map(|_| RemoveOutcome::Removed);

        match &outcome {
            Ok(_) => {
                tracing::info!(resource = R::PLURAL, id, "deleted");
                self.screen.notify(
                    ticket,
                    NoticeKind::Success,
                    format!("{} deleted successfully!", R::TITLE),
                );
            }
            Err(error) => {
                tracing::warn!(resource = R::PLURAL, id, %error, "delete failed");
                let fallback = format!("Failed to delete {}", R::NOUN);
                self.screen.notify(ticket, NoticeKind::Error, error.notice_generic(&fallback));
            }
        }

        self.reload().await;
        outcome
    }

    async fn post(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let request = ApiRequest::post(R::PATH).authenticated(true).json(draft)?;
        check_response(self.client.request(request).await?)?;
        Ok(())
    }

    async fn reload(&self) {
        if let Err(error) = self.load().await {
            tracing::debug!(resource = R::PLURAL, %error, "reload after mutation failed");
        }
    }
}
