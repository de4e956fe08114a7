use leptos::*;

use crate::catalog::TRAIN_ITEMS;
use crate::state::Intent;

#[component]
pub fn Train(dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div class="train">
            <h2 class="screen-title">"Train"</h2>
            <p class="screen-subtitle">"Pick a session to start"</p>

            <div class="train-list">
                {TRAIN_ITEMS.iter().map(|item| {
                    let workout_id = item.workout_id;
                    view! {
                        <button
                            class="train-item"
                            on:click=move |_| dispatch.call(Intent::OpenPlayer(workout_id.to_string()))
                        >
                            <div class="train-item-text">
                                <p class="train-item-title">{item.title}</p>
                                <p class="train-item-detail">{item.detail}</p>
                            </div>
                            <span class="train-item-minutes">{format!("{} min", item.minutes)}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="card">
                <p class="section-title">"Coach tip"</p>
                <p class="card-text">
                    "Hold 7–8/10 effort through the first half, sprint at the end. Technique before tempo."
                </p>
            </div>
        </div>
    }
}
