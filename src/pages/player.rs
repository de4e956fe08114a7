use leptos::*;

use crate::catalog;
use crate::config::AppConfig;
use crate::pages::ProgressRing;
use crate::player::{block_minutes, format_clock, Player, WorkoutClock};
use crate::state::Intent;

#[component]
pub fn WorkoutPlayer(workout_id: String, dispatch: Callback<Intent>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let Some(workout) = catalog::workout(&workout_id) else {
        log::warn!("unknown workout {}", workout_id);
        return view! { <PlayerMessage text="Workout not found" dispatch=dispatch /> }.into_view();
    };
    let player = match Player::new(workout) {
        Ok(player) => player,
        Err(e) => {
            log::warn!("cannot play workout: {}", e);
            return view! { <PlayerMessage text="This workout has no blocks" dispatch=dispatch /> }.into_view();
        }
    };
    log::info!("playing {}", player.workout().name);

    let name = player.workout().name.clone();
    let player = create_rw_signal(player);

    // Ticks stop when the overlay unmounts
    let clock = WorkoutClock::start(config.tick_interval_ms, move |ticks| {
        player.update(|p| p.tick_many(ticks));
    });
    on_cleanup(move || drop(clock));

    let progress = Signal::derive(move || player.with(|p| p.progress_percent()));
    let is_complete = move || player.with(|p| p.is_complete());
    let close = move |_: ev::MouseEvent| dispatch.call(Intent::ClosePlayer);

    view! {
        <div class="overlay player">
            <div class="overlay-header">
                <button class="ghost-btn" on:click=close>"Close"</button>
                <p class="player-name">{name}</p>
                <div></div>
            </div>

            <div class="player-ring">
                <ProgressRing value=progress size=140 />
            </div>

            <div class="player-current">
                <p class="player-current-label">
                    {move || player.with(|p| p.current().kind.label().to_uppercase())}
                </p>
                <p class="player-current-title">{move || player.with(|p| p.current().title.clone())}</p>
                <p class="player-current-details">{move || player.with(|p| p.current().details.clone())}</p>
                <p class="player-countdown">{move || player.with(|p| format_clock(p.state().remaining))}</p>
                <div class="player-controls">
                    <button class="start-btn" on:click=move |_| player.update(|p| p.toggle_pause())>
                        {move || if player.with(|p| p.state().running) { "Pause" } else { "Resume" }}
                    </button>
                    <button class="ghost-btn" on:click=move |_| player.update(|p| p.skip())>"Next block"</button>
                </div>
            </div>

            <div class="player-blocks">
                {move || {
                    let current = player.with(|p| p.state().index);
                    player.with(|p| p.blocks().to_vec()).into_iter().enumerate().map(|(i, b)| {
                        let class = if i == current { "player-block active" } else { "player-block" };
                        view! {
                            <div class=class>
                                <div>
                                    <p class="player-block-title">{b.title}</p>
                                    <p class="player-block-details">{b.details}</p>
                                </div>
                                <span class="player-block-minutes">{format!("{} min", block_minutes(b.seconds))}</span>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <div class="player-footer">
                {move || if is_complete() {
                    view! {
                        <button class="create-btn" on:click=close>"Done — log session"</button>
                    }.into_view()
                } else {
                    view! {
                        <div class="player-progress-text">{format!("{}% done • Keep going", progress.get())}</div>
                    }.into_view()
                }}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn PlayerMessage(text: &'static str, dispatch: Callback<Intent>) -> impl IntoView {
    view! {
        <div class="overlay player">
            <div class="overlay-header">
                <button class="ghost-btn" on:click=move |_| dispatch.call(Intent::ClosePlayer)>"Close"</button>
            </div>
            <p class="player-message">{text}</p>
        </div>
    }
}
