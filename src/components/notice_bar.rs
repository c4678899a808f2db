//! Notice Bar Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{DashboardStateStoreFields, NoticeLevel};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    move || {
        ctx.store.notice().get().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice notice-info",
                NoticeLevel::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button class="notice-dismiss" type="button" on:click=move |_| ctx.dismiss_notice()>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
