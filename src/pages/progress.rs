use leptos::*;

use crate::pages::Stat;
use crate::plan::weekly_summaries;
use crate::state::AppState;

/// Bar height in percent of the largest week.
fn bar_percent(minutes: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    minutes * 100 / max
}

#[component]
pub fn Progress(state: ReadSignal<AppState>) -> impl IntoView {
    let summaries = move || state.with(|s| weekly_summaries(&s.plan));

    view! {
        <div class="progress">
            <h2 class="screen-title">"Progress"</h2>
            <p class="screen-subtitle">"Volume, times, conditioning"</p>

            <div class="card">
                <p class="section-title">"Planned minutes per week"</p>
                <div class="week-bars">
                    {move || {
                        let weeks = summaries();
                        let max = weeks.iter().map(|w| w.minutes).max().unwrap_or(0);
                        weeks.into_iter().map(|w| view! {
                            <div class="week-bar">
                                <div class="week-bar-track">
                                    <div
                                        class="week-bar-fill"
                                        style=format!("height: {}%", bar_percent(w.minutes, max))
                                    ></div>
                                </div>
                                <span class="week-bar-label">{format!("W{}", w.week)}</span>
                                <span class="week-bar-value">
                                    {format!("{} min · {} kcal", w.minutes, w.kcal)}
                                </span>
                            </div>
                        }).collect_view()
                    }}
                </div>
            </div>

            <div class="quick-stats">
                <Stat label="Squat 5×5" value="85 kg".to_string() />
                <Stat label="Row 500m" value="1:43".to_string() />
                <Stat label="WOD 3RFT" value="7:58".to_string() />
            </div>

            <div class="card">
                <p class="section-title">"Next goal"</p>
                <p class="card-text">"Squat 5×5 at 90 kg within 2 weeks. Add 2.5 kg each week."</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_biggest_week() {
        assert_eq!(bar_percent(240, 240), 100);
        assert_eq!(bar_percent(120, 240), 50);
        assert_eq!(bar_percent(10, 0), 0);
    }
}
