mod coach;
mod home;
mod onboarding;
mod plan;
mod player;
mod profile;
mod progress;
mod social;
mod tab_bar;
mod train;

use leptos::*;

pub use coach::CoachPanel;
pub use home::Home;
pub use onboarding::Onboarding;
pub use plan::PlanView;
pub use player::WorkoutPlayer;
pub use profile::Profile;
pub use progress::Progress;
pub use social::Social;
pub use tab_bar::TabBar;
pub use train::Train;

/// Circular percentage gauge.
#[component]
pub fn ProgressRing(#[prop(into)] value: MaybeSignal<u32>, #[prop(default = 92)] size: u32) -> impl IntoView {
    let shown = value.clone();
    let ring_style = move || {
        let degrees = value.get().min(100) * 36 / 10;
        format!(
            "width: {size}px; height: {size}px; background: conic-gradient(#60a5fa {degrees}deg, #1f2937 0deg)"
        )
    };
    view! {
        <div class="progress-ring" style=ring_style>
            <span class="progress-ring-value">{move || format!("{}%", shown.get().min(100))}</span>
        </div>
    }
}

/// Small stat tile used on Home and Progress.
#[component]
pub fn Stat(label: &'static str, value: String, #[prop(optional)] suffix: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="stat">
            <p class="stat-label">{label}</p>
            <p class="stat-value">
                {value}
                {suffix.map(|s| view! { <span class="stat-suffix">" "{s}</span> })}
            </p>
        </div>
    }
}
