use leptos::*;

use crate::state::{AppState, Intent, ONBOARDING_STEPS};
use crate::types::{BaselineField, Equipment, Goal, Level};

#[component]
pub fn Onboarding(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    let step = create_memo(move |_| state.with(|s| s.onboarding_step));
    let is_last = move || state.with(|s| s.is_last_onboarding_step());

    view! {
        <div class="overlay onboarding">
            <div class="onboarding-card">
                <p class="onboarding-step">{move || format!("Step {} / {}", step.get() + 1, ONBOARDING_STEPS)}</p>

                {move || match step.get() {
                    0 => view! { <GoalStep state=state dispatch=dispatch /> }.into_view(),
                    1 => view! { <BaselineStep state=state dispatch=dispatch /> }.into_view(),
                    _ => view! { <EquipmentStep state=state dispatch=dispatch /> }.into_view(),
                }}

                <div class="onboarding-nav">
                    <button class="ghost-btn" on:click=move |_| dispatch.call(Intent::OnboardingBack)>
                        {move || if step.get() > 0 { "Back" } else { "Skip" }}
                    </button>
                    {move || if is_last() {
                        view! {
                            <button class="create-btn" on:click=move |_| dispatch.call(Intent::CompleteOnboarding)>
                                "Create my plan"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button class="start-btn" on:click=move |_| dispatch.call(Intent::OnboardingNext)>
                                "Continue"
                            </button>
                        }.into_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn GoalStep(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div>
            <h3 class="onboarding-title">"Goal & level"</h3>
            <p class="onboarding-text">"What are you aiming for over the next 9 months?"</p>
            <div class="choice-grid">
                {Goal::ALL.into_iter().map(|goal| {
                    let class = move || if state.with(|s| s.profile.goal == goal) { "choice active" } else { "choice" };
                    view! {
                        <button class=class on:click=move |_| dispatch.call(Intent::SetGoal(goal))>
                            {goal.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="choice-grid levels">
                {Level::ALL.into_iter().map(|level| {
                    let class = move || if state.with(|s| s.profile.level == level) { "choice active" } else { "choice" };
                    view! {
                        <button class=class on:click=move |_| dispatch.call(Intent::SetLevel(level))>
                            {level.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BaselineStep(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div>
            <h3 class="onboarding-title">"Quick fitness test"</h3>
            <p class="onboarding-text">"Fill in what you can do today (an estimate is fine)."</p>
            <div class="baseline-grid">
                {BaselineField::ALL.into_iter().map(|field| view! {
                    <label class="baseline-field">
                        {field.label()}
                        <input
                            placeholder=field.placeholder()
                            prop:value=move || state.with_untracked(|s| s.profile.baseline.get(field).to_string())
                            on:change=move |ev| dispatch.call(Intent::SetBaseline(field, event_target_value(&ev)))
                        />
                    </label>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn EquipmentStep(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div>
            <h3 class="onboarding-title">"Equipment"</h3>
            <p class="onboarding-text">"Tick what you have access to."</p>
            <div class="choice-grid">
                {Equipment::ALL.into_iter().map(|item| view! {
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.profile.has_equipment(item))
                            on:change=move |_| dispatch.call(Intent::ToggleEquipment(item))
                        />
                        " "{item.label()}
                    </label>
                }).collect_view()}
            </div>
        </div>
    }
}
