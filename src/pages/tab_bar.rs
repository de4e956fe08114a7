use leptos::*;

use crate::state::{AppState, Intent};
use crate::types::AppView;

#[component]
pub fn TabBar(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {AppView::ALL.into_iter().map(|tab| {
                let class = move || if state.with(|s| s.view == tab) { "tab active" } else { "tab" };
                view! {
                    <button class=class on:click=move |_| dispatch.call(Intent::SelectTab(tab))>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
