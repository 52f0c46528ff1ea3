use std::{collections::HashMap, sync::Arc};

use ledger::EntryKind;
use teloxide::types::ChatId;
use tokio::sync::Mutex;

/// Where a flow stands. The amount is kept as normalized text until the
/// record line is formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FlowState {
    AwaitingAmount,
    AwaitingCategory { amount: String },
}

/// Per-chat transient state: at most one flow in progress per entry kind,
/// so an expense and a revenue entry never share amount or category.
#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
    flows: HashMap<EntryKind, FlowState>,
}

impl Session {
    pub(crate) fn flow(&self, kind: EntryKind) -> Option<&FlowState> {
        self.flows.get(&kind)
    }

    pub(crate) fn set_flow(&mut self, kind: EntryKind, state: FlowState) {
        self.flows.insert(kind, state);
    }

    pub(crate) fn clear_flow(&mut self, kind: EntryKind) {
        self.flows.remove(&kind);
    }

    pub(crate) fn clear(&mut self) {
        self.flows.clear();
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.flows.is_empty()
    }
}

#[derive(Clone, Default)]
pub(crate) struct SessionStore {
    inner: Arc<Mutex<HashMap<ChatId, Session>>>,
}

impl SessionStore {
    pub(crate) async fn get(&self, chat_id: ChatId) -> Session {
        let guard = self.inner.lock().await;
        guard.get(&chat_id).cloned().unwrap_or_default()
    }

    pub(crate) async fn update<F>(&self, chat_id: ChatId, f: F) -> Session
    where
        F: FnOnce(&mut Session),
    {
        let mut guard = self.inner.lock().await;
        let session = guard.entry(chat_id).or_default();
        f(session);
        session.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_keyed_per_chat() {
        let store = SessionStore::default();

        store
            .update(ChatId(1), |s| {
                s.set_flow(EntryKind::Expense, FlowState::AwaitingAmount)
            })
            .await;

        assert!(!store.get(ChatId(1)).await.is_idle());
        assert!(store.get(ChatId(2)).await.is_idle());
    }
}
