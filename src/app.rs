use chrono::{Datelike, Duration, NaiveDate};
use leptos::*;

use crate::config::AppConfig;
use crate::pages::{
    CoachPanel, Home, Onboarding, PlanView, Profile, Progress, Social, TabBar, Train, WorkoutPlayer,
};
use crate::state::{AppState, Effect, Intent};
use crate::storage::{self, LocalStorage};
use crate::types::AppView;

pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

/// (weekday, day of month) for the seven day buttons starting at `start`.
pub fn week_day_labels(start: NaiveDate) -> Vec<(String, u32)> {
    (0..7)
        .map(|i| {
            let date = start + Duration::days(i);
            (date.format("%a").to_string(), date.day())
        })
        .collect()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let stored = storage::load_plan(&LocalStorage, &config.plan_key);
    let app = create_rw_signal(AppState::new(stored));
    let plan_key = config.plan_key.clone();
    provide_context(config);

    // Single place where router effects touch the store
    let dispatch = Callback::new(move |intent: Intent| {
        let mut effect = None;
        app.update(|s| effect = s.apply(intent));
        match effect {
            Some(Effect::PersistPlan(plan)) => storage::save_plan(&LocalStorage, &plan_key, &plan),
            Some(Effect::ClearPlan) => storage::clear_plan(&LocalStorage, &plan_key),
            None => {}
        }
    });

    let state = app.read_only();
    let current_view = create_memo(move |_| state.with(|s| s.view));
    // Re-keyed on the workout id so opening another workout remounts the player
    let playing = create_memo(move |_| state.with(|s| s.playing().map(str::to_string)));
    let coach_open = create_memo(move |_| state.with(|s| s.coach_open));
    let onboarding_open = create_memo(move |_| state.with(|s| s.onboarding_open));

    view! {
        <div class="app">
            <main class="screen">
                {move || match current_view.get() {
                    AppView::Home => view! { <Home state=state dispatch=dispatch /> }.into_view(),
                    AppView::Train => view! { <Train dispatch=dispatch /> }.into_view(),
                    AppView::Plan => view! { <PlanView state=state dispatch=dispatch /> }.into_view(),
                    AppView::Progress => view! { <Progress state=state /> }.into_view(),
                    AppView::Social => view! { <Social /> }.into_view(),
                    AppView::Profile => view! { <Profile state=state dispatch=dispatch /> }.into_view(),
                }}
            </main>

            <TabBar state=state dispatch=dispatch />

            {move || playing.get().map(|workout_id| view! {
                <WorkoutPlayer workout_id=workout_id dispatch=dispatch />
            })}

            {move || coach_open.get().then(|| view! { <CoachPanel dispatch=dispatch /> })}

            {move || onboarding_open.get().then(|| view! { <Onboarding state=state dispatch=dispatch /> })}

            {move || (!onboarding_open.get()).then(|| view! {
                <div class="coach-nudge">
                    <span class="coach-nudge-tag">"Coach"</span>
                    "Start today's session or open the AI Coach to adjust the intensity."
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_label_is_short_weekday_day_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(format_day_label(date), "Sat 17 Oct");
    }

    #[test]
    fn week_labels_cross_month_end() {
        let start = NaiveDate::from_ymd_opt(2026, 10, 29).unwrap();
        let labels = week_day_labels(start);
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], ("Thu".to_string(), 29));
        assert_eq!(labels[3], ("Sun".to_string(), 1));
        assert_eq!(labels[6], ("Wed".to_string(), 4));
    }
}
