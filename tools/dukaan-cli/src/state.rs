//! Session state persisted between CLI invocations.
//!
//! One JSON file holds the language cookie, the cart, and a snapshot of the
//! mock backend, so orders and address changes survive from one command to
//! the next.

use anyhow::{Context as _, Result};
use dukaan_cache::{Cache, CookieJar, Session, SessionId};
use dukaan_commerce::cart::Cart;
use dukaan_data::{BackendSnapshot, MockBackend};
use dukaan_store::{Services, Storefront};

use crate::context::Context;

const BACKEND_KEY: &str = "backend";

/// A storefront restored from the state file.
pub struct ShopState {
    cache: Cache,
    carts: Session<Cart>,
    session: SessionId,
    backend: MockBackend,
    pub storefront: Storefront,
}

impl ShopState {
    /// Open (or create) the state file named in the config.
    pub fn open(ctx: &Context) -> Result<Self> {
        let path = ctx.state_path();
        tracing::debug!(path = %path.display(), "opening state file");
        let cache = Cache::open(&path)
            .with_context(|| format!("Failed to open state file: {}", path.display()))?;

        let snapshot = match cache.get::<BackendSnapshot>(BACKEND_KEY)? {
            Some(snapshot) => snapshot,
            None => BackendSnapshot::seed().context("Failed to load seed data")?,
        };
        let backend = MockBackend::from_snapshot(snapshot, ctx.config.latency);

        let carts = Session::new(cache.clone());
        let session = SessionId::default();
        let cart = carts.get_or_create(&session)?;

        let storefront = Storefront::new(
            Services::from(&backend),
            CookieJar::new(cache.clone()),
            ctx.config.settings(),
        )?
        .with_cart(cart);

        Ok(Self {
            cache,
            carts,
            session,
            backend,
            storefront,
        })
    }

    /// Write the cart and backend back to the state file.
    pub async fn save(&self) -> Result<()> {
        let version = self.carts.set(&self.session, self.storefront.cart())?;
        self.cache
            .set(BACKEND_KEY, &self.backend.snapshot().await)
            .context("Failed to save backend state")?;
        tracing::debug!(version, "session saved");
        Ok(())
    }

    /// Forget everything: cart, language and backend changes.
    pub fn reset(ctx: &Context) -> Result<()> {
        let cache = Cache::open(ctx.state_path())?;
        for key in cache.keys()? {
            cache.delete(&key)?;
        }
        Ok(())
    }
}
