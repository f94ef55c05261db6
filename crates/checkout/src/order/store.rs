//! Shared order store and the dispatch capability handed to steps.

use std::sync::{Arc, PoisonError, RwLock};

use common::CheckoutId;

use super::{OrderAction, OrderState};

/// Capability to send actions to the order state.
///
/// Steps receive only this, never the state itself.
pub trait OrderDispatch {
    fn dispatch(&self, action: OrderAction);
}

#[derive(Debug, Default)]
struct StoreInner {
    state: OrderState,
    actions: Vec<OrderAction>,
}

/// In-process order store shared by the checkout steps.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl OrderStore {
    /// Creates a store for a new checkout session.
    pub fn new(checkout_id: CheckoutId) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state: OrderState::new(checkout_id),
                actions: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> OrderState {
        self.read(|inner| inner.state.clone())
    }

    /// Returns every action dispatched so far, oldest first.
    pub fn actions(&self) -> Vec<OrderAction> {
        self.read(|inner| inner.actions.clone())
    }

    pub fn dispatch_count(&self) -> usize {
        self.read(|inner| inner.actions.len())
    }

    fn read<T>(&self, f: impl FnOnce(&StoreInner) -> T) -> T {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&inner)
    }
}

impl OrderDispatch for OrderStore {
    fn dispatch(&self, action: OrderAction) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            checkout_id = %inner.state.checkout_id(),
            action = action.action_type(),
            "dispatching order action"
        );
        inner.actions.push(action.clone());
        inner.state.reduce(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressFormData;

    fn address() -> AddressFormData {
        AddressFormData {
            address1: "Calle 1".to_string(),
            address2: "2B".to_string(),
            city: "Rosario".to_string(),
            state: "Santa Fe".to_string(),
            zip_code: "2000".to_string(),
        }
    }

    #[test]
    fn test_dispatch_updates_state_and_log() {
        let store = OrderStore::new(CheckoutId::new());
        store.dispatch(OrderAction::SetAddress(address()));

        assert_eq!(store.dispatch_count(), 1);
        assert_eq!(store.snapshot().address(), Some(&address()));
        assert_eq!(store.actions(), vec![OrderAction::SetAddress(address())]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = OrderStore::default();
        let handle = store.clone();
        handle.dispatch(OrderAction::SetAddress(address()));

        assert_eq!(store.dispatch_count(), 1);
        assert_eq!(store.snapshot().checkout_id(), handle.snapshot().checkout_id());
    }
}
