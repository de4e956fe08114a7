use leptos::*;

use crate::app::{today, week_day_labels};
use crate::plan::{week_of, WEEKS};
use crate::state::{AppState, Intent};

#[component]
pub fn PlanView(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    let labels = week_day_labels(today());
    let selected = move || state.with(|s| s.selected_plan_entry().cloned());

    view! {
        <div class="plan">
            <h2 class="screen-title">"Plan"</h2>
            <p class="screen-subtitle">"Weekly schedule & adjustments"</p>

            <div class="pill-row">
                {(1..=WEEKS).map(|week| {
                    let class = move || if state.with(|s| s.plan_week == week) { "pill active" } else { "pill" };
                    view! {
                        <button class=class on:click=move |_| dispatch.call(Intent::SelectPlanWeek(week))>
                            {format!("Week {}", week)}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="day-selector">
                {labels.into_iter().enumerate().map(|(i, (weekday, date))| {
                    let class = move || if state.with(|s| s.plan_day == i) { "day-btn active" } else { "day-btn" };
                    let minutes = move || state.with(|s| {
                        week_of(&s.plan, s.plan_week)
                            .get(i)
                            .map(|e| format!("{}′", e.duration))
                            .unwrap_or_default()
                    });
                    view! {
                        <button class=class on:click=move |_| dispatch.call(Intent::SelectPlanDay(i))>
                            <p class="day-btn-weekday">{weekday}</p>
                            <p class="day-btn-date">{date}</p>
                            <p class="day-btn-minutes">{minutes}</p>
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || match selected() {
                Some(entry) => view! {
                    <div class="card">
                        <p class="card-label">{format!("Week {} · Day {}", entry.week, entry.day)}</p>
                        <p class="card-title">{entry.title}</p>
                        <p class="card-text">"Focus: "{entry.focus}</p>
                        <p class="card-text">{format!("{} min · {} kcal", entry.duration, entry.kcal)}</p>
                    </div>
                }.into_view(),
                None => view! { <div class="card">"No sessions planned"</div> }.into_view(),
            }}
        </div>
    }
}
