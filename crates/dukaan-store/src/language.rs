//! Display language state, persisted in a cookie.

use crate::error::StoreResult;
use crate::store::{Reducer, Store, StoreAction, StoreObserver, SubscriptionId};
use dukaan_cache::{cookie, CookieJar};
use dukaan_i18n::{Direction, Language, TextKey};
use serde::Serialize;
use std::time::Duration;

/// Cookie holding the selected language code.
pub const LANGUAGE_COOKIE: &str = "dukaanLanguage";

/// How long the loading flag stays up after a language switch.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LanguageState {
    pub language: Language,
    pub direction: Direction,
    pub loading: bool,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
            loading: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAction {
    SetLanguage(Language),
    Toggle,
    TransitionFinished,
}

impl StoreAction for LanguageAction {
    fn name(&self) -> &'static str {
        match self {
            LanguageAction::SetLanguage(_) => "language/set_language",
            LanguageAction::Toggle => "language/toggle",
            LanguageAction::TransitionFinished => "language/transition_finished",
        }
    }
}

pub struct LanguageReducer;

impl Reducer for LanguageReducer {
    type State = LanguageState;
    type Action = LanguageAction;

    fn reduce(state: &mut LanguageState, action: LanguageAction) {
        match action {
            LanguageAction::SetLanguage(language) => {
                *state = LanguageState {
                    loading: true,
                    ..LanguageState::new(language)
                };
            }
            LanguageAction::Toggle => {
                *state = LanguageState {
                    loading: true,
                    ..LanguageState::new(state.language.toggled())
                };
            }
            LanguageAction::TransitionFinished => state.loading = false,
        }
    }
}

/// Language store with its side effects: the cookie write and the short
/// transition delay.
pub struct LanguageStore {
    store: Store<LanguageReducer>,
    jar: CookieJar,
    transition: Duration,
}

impl LanguageStore {
    /// Initialise from the cookie, falling back to `default` when the cookie
    /// is absent or holds an unsupported code.
    pub fn load(jar: CookieJar, default: Language) -> StoreResult<Self> {
        let language = match jar.get(LANGUAGE_COOKIE)? {
            None => default,
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(cookie = LANGUAGE_COOKIE, value = %code, "unsupported language cookie");
                default
            }),
        };
        Ok(Self {
            store: Store::new("language", LanguageState::new(language)),
            jar,
            transition: TRANSITION_DELAY,
        })
    }

    /// Override the transition delay.
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn state(&self) -> &LanguageState {
        self.store.state()
    }

    pub fn language(&self) -> Language {
        self.state().language
    }

    pub fn direction(&self) -> Direction {
        self.state().direction
    }

    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Translate a UI string into the active language.
    pub fn t(&self, key: TextKey) -> &'static str {
        key.get(self.language())
    }

    pub fn subscribe(
        &mut self,
        observer: impl StoreObserver<LanguageState> + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub async fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.switch(LanguageAction::SetLanguage(language)).await
    }

    pub async fn toggle(&mut self) -> StoreResult<Language> {
        self.switch(LanguageAction::Toggle).await?;
        Ok(self.language())
    }

    async fn switch(&mut self, action: LanguageAction) -> StoreResult<()> {
        self.store.dispatch(action);
        let language = self.language();
        self.jar
            .set(LANGUAGE_COOKIE, language.code(), cookie::one_year())?;
        tracing::info!(%language, direction = ?self.direction(), "language changed");

        if !self.transition.is_zero() {
            tokio::time::sleep(self.transition).await;
        }
        self.store.dispatch(LanguageAction::TransitionFinished);
        Ok(())
    }
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("state", self.state())
            .field("transition", &self.transition)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_reducer_sets_direction() {
        let mut state = LanguageState::default();
        LanguageReducer::reduce(&mut state, LanguageAction::SetLanguage(Language::Ur));
        assert_eq!(state.direction, Direction::Rtl);
        assert!(state.loading);
        LanguageReducer::reduce(&mut state, LanguageAction::Toggle);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.direction, Direction::Ltr);
    }

    #[test]
    fn test_load_defaults() {
        let jar = CookieJar::in_memory();
        let store = LanguageStore::load(jar.clone(), Language::En).unwrap();
        assert_eq!(store.language(), Language::En);
        assert!(!store.is_loading());

        jar.set(LANGUAGE_COOKIE, "fr", cookie::one_year()).unwrap();
        let store = LanguageStore::load(jar.clone(), Language::En).unwrap();
        assert_eq!(store.language(), Language::En);

        jar.set(LANGUAGE_COOKIE, "ur", cookie::one_year()).unwrap();
        let store = LanguageStore::load(jar, Language::En).unwrap();
        assert_eq!(store.direction(), Direction::Rtl);
        assert_eq!(store.t(TextKey::Cart), TextKey::Cart.ur());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_persists_and_flashes_loading() {
        let jar = CookieJar::in_memory();
        let mut store = LanguageStore::load(jar.clone(), Language::En).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state: &LanguageState, _: u64| {
            sink.lock().unwrap().push(state.loading);
        });

        let start = tokio::time::Instant::now();
        assert_eq!(store.toggle().await.unwrap(), Language::Ur);
        assert!(start.elapsed() >= TRANSITION_DELAY);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
        assert_eq!(store.direction(), Direction::Rtl);
        assert_eq!(jar.get(LANGUAGE_COOKIE).unwrap().as_deref(), Some("ur"));

        let reloaded = LanguageStore::load(jar, Language::En).unwrap();
        assert_eq!(reloaded.language(), Language::Ur);
    }

    #[tokio::test]
    async fn test_cookie_expires_in_a_year() {
        let jar = CookieJar::in_memory();
        let mut store = LanguageStore::load(jar.clone(), Language::En)
            .unwrap()
            .with_transition(Duration::ZERO);
        store.set_language(Language::Ur).await.unwrap();

        let cookie = jar.cookie(LANGUAGE_COOKIE).unwrap().unwrap();
        let days = (cookie.expires_at - chrono::Utc::now()).num_days();
        assert!((364..=365).contains(&days));
    }
}
