//! Theme store
//!
//! An explicit, shareable theme value. One store is created where the
//! component tree is mounted and threaded down to widgets as a [`ThemeHandle`];
//! parallel tests each get their own isolated store.
//!
//! Tokens are swapped wholesale on a mode change. The store is the single
//! writer; widgets only read tokens and register change subscriptions.

use crate::error::ThemeError;
use crate::theme::{ThemeBundle, ThemeMode};
use crate::themes::TinctTheme;
use crate::tokens::{ColorToken, SpacingToken, ThemeTokens};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, RwLock, Weak};
use tinct_core::Color;

new_key_type! {
    /// Key for a registered theme-change subscriber
    pub struct SubscriptionId;
}

type SubscriberFn = Box<dyn FnMut() + Send>;

struct StoreInner {
    bundle: ThemeBundle,
    mode: RwLock<ThemeMode>,
    tokens: RwLock<ThemeTokens>,
    subscribers: Mutex<SlotMap<SubscriptionId, SubscriberFn>>,
}

impl StoreInner {
    fn notify(&self) {
        let mut subscribers = self.subscribers.lock().unwrap();
        for (_, subscriber) in subscribers.iter_mut() {
            subscriber();
        }
    }
}

/// Holds the current theme mode and the resolved token set for it
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store from a bundle with a configurable initial mode.
    ///
    /// Mode is not persisted anywhere; a fresh store always starts at the
    /// mode it is given.
    pub fn new(bundle: ThemeBundle, mode: ThemeMode) -> Self {
        let tokens = bundle.for_mode(mode).tokens();
        Self {
            inner: Arc::new(StoreInner {
                bundle,
                mode: RwLock::new(mode),
                tokens: RwLock::new(tokens),
                subscribers: Mutex::new(SlotMap::with_key()),
            }),
        }
    }

    /// Create a store over the default theme bundle
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self::new(TinctTheme::bundle(), mode)
    }

    /// Get the current mode
    pub fn mode(&self) -> ThemeMode {
        *self.inner.mode.read().unwrap()
    }

    /// Get the current token set
    pub fn tokens(&self) -> ThemeTokens {
        self.inner.tokens.read().unwrap().clone()
    }

    /// Get a single color token value
    pub fn color(&self, token: ColorToken) -> Color {
        self.inner.tokens.read().unwrap().color(token)
    }

    /// Get a single spacing token value
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.inner.tokens.read().unwrap().spacing(token)
    }

    /// Set the mode, re-deriving tokens and notifying subscribers.
    ///
    /// No-op when the mode is unchanged.
    pub fn set_mode(&self, mode: ThemeMode) {
        {
            let mut current = self.inner.mode.write().unwrap();
            if *current == mode {
                return;
            }
            tracing::debug!(
                theme = self.inner.bundle.name(),
                from = ?*current,
                to = ?mode,
                "theme mode switched"
            );
            *current = mode;
            *self.inner.tokens.write().unwrap() = self.inner.bundle.for_mode(mode).tokens();
        }
        self.inner.notify();
    }

    /// Toggle between light and dark mode
    pub fn toggle(&self) {
        self.set_mode(self.mode().toggle());
    }

    /// Register a change subscriber.
    ///
    /// The callback runs after every mode change. Dropping the returned
    /// subscription unregisters it, so a torn-down widget is never called.
    pub fn subscribe<F: FnMut() + Send + 'static>(&self, callback: F) -> ThemeSubscription {
        let id = self
            .inner
            .subscribers
            .lock()
            .unwrap()
            .insert(Box::new(callback));
        ThemeSubscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Create a handle that widgets hold to read tokens.
    ///
    /// The handle does not keep the store alive; reads fail with
    /// [`ThemeError::NotInitialized`] once the store is dropped.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }
}

/// A weak reference to a [`ThemeStore`] held by widgets
#[derive(Clone)]
pub struct ThemeHandle {
    store: Weak<StoreInner>,
}

impl ThemeHandle {
    /// A handle with no store attached. All reads fail with
    /// [`ThemeError::NotInitialized`].
    pub fn detached() -> Self {
        Self { store: Weak::new() }
    }

    fn upgrade(&self) -> Result<Arc<StoreInner>, ThemeError> {
        self.store.upgrade().ok_or(ThemeError::NotInitialized)
    }

    /// Whether a live store is attached
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Read the current mode
    pub fn mode(&self) -> Result<ThemeMode, ThemeError> {
        Ok(*self.upgrade()?.mode.read().unwrap())
    }

    /// Read the current token set
    pub fn tokens(&self) -> Result<ThemeTokens, ThemeError> {
        Ok(self.upgrade()?.tokens.read().unwrap().clone())
    }

    /// Register a change subscriber on the underlying store
    pub fn subscribe<F: FnMut() + Send + 'static>(
        &self,
        callback: F,
    ) -> Result<ThemeSubscription, ThemeError> {
        let inner = self.upgrade()?;
        let id = inner.subscribers.lock().unwrap().insert(Box::new(callback));
        Ok(ThemeSubscription {
            store: Arc::downgrade(&inner),
            id,
        })
    }
}

/// Guard for a registered subscriber; unregisters on drop
pub struct ThemeSubscription {
    store: Weak<StoreInner>,
    id: SubscriptionId,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.lock().unwrap().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_initial_mode_is_configurable() {
        let store = ThemeStore::with_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.color(ColorToken::Primary).to_hex_string(), "#60a5fa");
    }

    #[test]
    fn test_toggle_swaps_tokens_wholesale() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        assert_eq!(store.color(ColorToken::Primary).to_hex_string(), "#3b82f6");

        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.color(ColorToken::Primary).to_hex_string(), "#60a5fa");
    }

    #[test]
    fn test_double_toggle_restores_tokens() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        let before = store.tokens();
        store.toggle();
        store.toggle();
        assert_eq!(store.tokens(), before);
    }

    #[test]
    fn test_subscribers_notified_on_toggle_only_when_mode_changes() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let _sub = store.subscribe(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.toggle();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Setting the same mode again is a no-op
        store.set_mode(ThemeMode::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_subscription_unregisters() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        let sub = store.subscribe(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        drop(sub);
        assert_eq!(store.subscriber_count(), 0);

        store.toggle();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_detached_handle_fails_loudly() {
        let handle = ThemeHandle::detached();
        assert_eq!(handle.tokens(), Err(ThemeError::NotInitialized));
        assert_eq!(handle.mode(), Err(ThemeError::NotInitialized));
    }

    #[test]
    fn test_handle_fails_after_store_dropped() {
        let store = ThemeStore::with_mode(ThemeMode::Light);
        let handle = store.handle();
        assert!(handle.tokens().is_ok());

        drop(store);
        assert_eq!(handle.tokens(), Err(ThemeError::NotInitialized));
    }

    #[test]
    fn test_isolated_stores_do_not_interfere() {
        let a = ThemeStore::with_mode(ThemeMode::Light);
        let b = ThemeStore::with_mode(ThemeMode::Light);

        a.toggle();
        assert_eq!(a.mode(), ThemeMode::Dark);
        assert_eq!(b.mode(), ThemeMode::Light);
    }
}
