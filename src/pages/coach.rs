use leptos::*;

use crate::catalog::COACH_TIPS;
use crate::state::Intent;

#[component]
pub fn CoachPanel(dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div class="overlay coach">
            <div class="overlay-header">
                <span class="overlay-title">"AI Coach"</span>
                <button class="ghost-btn" on:click=move |_| dispatch.call(Intent::CloseCoach)>"Close"</button>
            </div>
            <div class="coach-tips">
                {COACH_TIPS.iter().map(|tip| view! { <div class="coach-tip">{*tip}</div> }).collect_view()}
            </div>
        </div>
    }
}
