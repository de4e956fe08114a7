use leptos::*;

use crate::catalog::{FEED, LEADERBOARD};

#[derive(Clone, Copy, PartialEq)]
enum SocialTab {
    Feed,
    Board,
}

#[component]
pub fn Social() -> impl IntoView {
    let (tab, set_tab) = create_signal(SocialTab::Feed);
    let tab_class = move |t: SocialTab| if tab.get() == t { "pill active" } else { "pill" };

    view! {
        <div class="social">
            <div class="pill-row">
                <button class=move || tab_class(SocialTab::Feed) on:click=move |_| set_tab.set(SocialTab::Feed)>
                    "Feed"
                </button>
                <button class=move || tab_class(SocialTab::Board) on:click=move |_| set_tab.set(SocialTab::Board)>
                    "Leaderboard"
                </button>
            </div>

            {move || match tab.get() {
                SocialTab::Feed => view! {
                    <div class="feed">
                        {FEED.iter().map(|p| view! {
                            <div class="feed-post">
                                <div class="feed-post-header">
                                    <span>{p.user}</span>
                                    <span>{format!("+{}", p.likes)}</span>
                                </div>
                                <p class="feed-post-text">{p.text}</p>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_view(),
                SocialTab::Board => view! {
                    <div class="card">
                        <p class="section-title">"Today's WOD – 3RFT"</p>
                        {LEADERBOARD.iter().enumerate().map(|(i, row)| view! {
                            <div class="board-row">
                                <span class="board-rank">{i + 1}</span>
                                <span class="board-user">{row.user}</span>
                                <span class="board-score">{row.score}</span>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
