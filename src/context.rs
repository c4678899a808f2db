//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, PendingWrite};
use crate::config::AppConfig;
use crate::store::{DashboardStateStoreFields, DashboardStore, Notice, NoticeLevel};

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    pub store: DashboardStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: DashboardStore) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
        }
    }

    /// Show a notice; it clears itself unless replaced first
    pub fn notify(&self, level: NoticeLevel, message: impl Into<String>) {
        let store = self.store;
        let id = store.notice_seq().get_untracked().wrapping_add(1);
        store.notice_seq().set(id);
        store.notice().set(Some(Notice {
            id,
            level,
            message: message.into(),
        }));

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.id));
            if current == Some(id) {
                store.notice().set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.store.notice().set(None);
    }

    /// Mirror a local change to the backend when write-through is on
    pub fn persist(&self, write: PendingWrite) {
        let config = self.config.get_value();
        if !config.write_through {
            return;
        }

        let ctx = *self;
        spawn_local(async move {
            if let Err(e) = commands::apply_write(&config, &write).await {
                log::error!("[API] {:?} failed: {}", write, e);
                ctx.notify(NoticeLevel::Error, format!("Não foi possível salvar a alteração: {}", e));
            }
        });
    }
}
