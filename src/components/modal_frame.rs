//! Modal Frame Component
//!
//! Overlay + dialog box; children render only while open.

use leptos::prelude::*;

#[component]
pub fn ModalFrame(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" type="button" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
