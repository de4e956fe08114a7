use leptos::*;

use crate::app::{format_day_label, today};
use crate::catalog::{BADGES, FEATURED_WORKOUT};
use crate::config::AppConfig;
use crate::pages::{ProgressRing, Stat};
use crate::state::{AppState, Intent};
use crate::types::AppView;

const LEVEL: u32 = 7;
const STREAK_DAYS: u32 = 6;
const XP: u32 = 380;
const XP_NEXT_LEVEL: u32 = 500;

fn xp_percent(xp: u32, next: u32) -> u32 {
    if next == 0 {
        return 100;
    }
    ((200 * xp + next) / (2 * next)).min(100)
}

fn short_title(title: &str) -> String {
    title.split_whitespace().next().unwrap_or_default().to_string()
}

#[component]
pub fn Home(state: ReadSignal<AppState>, dispatch: Callback<Intent>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let greeting = format!("{} • Hi {}", format_day_label(today()), config.athlete_name);

    let todays = move || state.with(|s| s.plan.first().cloned());
    let fourth = move || state.with(|s| s.plan.get(3).cloned());
    let preview = move || state.with(|s| s.plan.iter().take(5).cloned().collect::<Vec<_>>());
    let xp_width = format!("width: {}%", xp_percent(XP, XP_NEXT_LEVEL));

    view! {
        <div class="home">
            <div class="home-header">
                <div>
                    <h1 class="logo">"AthleteX"</h1>
                    <p class="home-greeting">{greeting}</p>
                </div>
                <button class="coach-btn" on:click=move |_| dispatch.call(Intent::OpenCoach)>
                    "AI Coach"
                </button>
            </div>

            <div class="quick-stats">
                <Stat label="Level" value=LEVEL.to_string() />
                <Stat label="Streak" value=format!("{} days", STREAK_DAYS) />
                <Stat label="VO₂ est." value="49".to_string() suffix="ml/kg/min" />
            </div>

            <div class="xp-bar">
                <div class="xp-bar-labels">
                    <span>{format!("Level {}", LEVEL)}</span>
                    <span>{format!("{}/{} XP", XP, XP_NEXT_LEVEL)}</span>
                </div>
                <div class="xp-bar-track"><div class="xp-bar-fill" style=xp_width></div></div>
            </div>

            <div class="hero-card">
                <ProgressRing value=72u32 />
                <div class="hero-body">
                    <p class="hero-label">"Today's session"</p>
                    <h2 class="hero-title">
                        {move || todays().map(|e| e.title).unwrap_or_else(|| "Strength — Base lifts".to_string())}
                    </h2>
                    <p class="hero-focus">
                        "Focus: "{move || todays().map(|e| e.focus).unwrap_or_default()}
                    </p>
                    <div class="hero-actions">
                        <button
                            class="start-btn"
                            on:click=move |_| dispatch.call(Intent::OpenPlayer(FEATURED_WORKOUT.to_string()))
                        >
                            "Start now"
                        </button>
                        <button class="ghost-btn" on:click=move |_| dispatch.call(Intent::SelectTab(AppView::Plan))>
                            "View schedule"
                        </button>
                    </div>
                </div>
            </div>

            <div class="badges">
                <p class="section-title">"Badges"</p>
                <div class="badge-row">
                    {BADGES.iter().map(|b| view! { <div class="badge">{b.name}</div> }).collect_view()}
                </div>
            </div>

            <div class="quick-actions">
                <button
                    class="quick-action"
                    on:click=move |_| dispatch.call(Intent::OpenPlayer("row-intervals".to_string()))
                >
                    <span class="quick-action-label">"Row 10×250"</span>
                    <span class="quick-action-sub">"Intervals"</span>
                </button>
                <button
                    class="quick-action"
                    on:click=move |_| dispatch.call(Intent::OpenPlayer("base-lifts".to_string()))
                >
                    <span class="quick-action-label">"Base lifts"</span>
                    <span class="quick-action-sub">"Strength"</span>
                </button>
                <button
                    class="quick-action"
                    on:click=move |_| dispatch.call(Intent::OpenPlayer(FEATURED_WORKOUT.to_string()))
                >
                    <span class="quick-action-label">
                        {move || fourth().map(|e| e.title).unwrap_or_else(|| "Mini-WOD".to_string())}
                    </span>
                    <span class="quick-action-sub">
                        {move || fourth().map(|e| e.focus).unwrap_or_else(|| "DL/PU/SQ".to_string())}
                    </span>
                </button>
            </div>

            <div class="week-preview">
                <div class="week-preview-header">
                    <p class="section-title">"Week plan"</p>
                    <button class="link-btn" on:click=move |_| dispatch.call(Intent::SelectTab(AppView::Plan))>
                        "See all"
                    </button>
                </div>
                <div class="week-preview-days">
                    {move || preview().into_iter().map(|e| view! {
                        <div class="preview-day">
                            <p class="preview-day-label">{format!("Day {}", e.day)}</p>
                            <p class="preview-day-title">{short_title(&e.title)}</p>
                            <p class="preview-day-duration">{format!("{} min", e.duration)}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
