use leptos::*;

use crate::state::{AppState, Intent};
use crate::types::BaselineField;

#[component]
pub fn Profile(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    let (reminders, set_reminders) = create_signal(true);
    let (confirm_reset, set_confirm_reset) = create_signal(false);

    let baseline_rows = move || {
        state.with(|s| {
            BaselineField::ALL
                .into_iter()
                .filter(|f| !s.profile.baseline.get(*f).is_empty())
                .map(|f| (f.label(), s.profile.baseline.get(f).to_string()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="profile">
            <h2 class="screen-title">"Profile"</h2>
            <p class="screen-subtitle">"Preferences & goals"</p>

            <div class="card">
                <p class="section-title">"Goal"</p>
                <p class="card-text">
                    {move || state.with(|s| format!("{} · {}", s.profile.goal.label(), s.profile.level.label()))}
                </p>
            </div>

            <div class="card">
                <p class="section-title">"Equipment"</p>
                <p class="card-text">{move || state.with(|s| s.profile.equipment_summary())}</p>
            </div>

            {move || {
                let rows = baseline_rows();
                (!rows.is_empty()).then(|| view! {
                    <div class="card">
                        <p class="section-title">"Fitness test"</p>
                        {rows.into_iter().map(|(label, value)| view! {
                            <div class="baseline-row">
                                <span>{label}</span>
                                <span>{value}</span>
                            </div>
                        }).collect_view()}
                    </div>
                })
            }}

            <div class="card">
                <p class="section-title">"Notifications"</p>
                <label class="toggle-row">
                    "Push reminders"
                    <input
                        type="checkbox"
                        prop:checked=move || reminders.get()
                        on:change=move |ev| set_reminders.set(event_target_checked(&ev))
                    />
                </label>
            </div>

            <button class="ghost-btn" on:click=move |_| set_confirm_reset.set(true)>"Create a new plan"</button>

            {move || confirm_reset.get().then(|| view! {
                <div class="modal-overlay">
                    <div class="confirm-dialog">
                        <div class="confirm-title">"Start over?"</div>
                        <div class="confirm-text">"Your saved plan is removed and onboarding starts again."</div>
                        <div class="confirm-buttons">
                            <button class="confirm-cancel" on:click=move |_| set_confirm_reset.set(false)>
                                "Cancel"
                            </button>
                            <button class="confirm-ok" on:click=move |_| {
                                set_confirm_reset.set(false);
                                dispatch.call(Intent::ResetPlan);
                            }>
                                "Yes, start over"
                            </button>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
