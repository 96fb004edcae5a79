use dioxus::prelude::*;

use score_core::model::{ScoreBoard, Session};

use crate::context::AppContext;
use crate::views::{DashboardView, PickerView};

/// The whole app is one screen with two states: identity picker until a
/// selection is made, dashboard afterwards. There is no path back.
#[component]
pub fn ScoreScreen() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(Session::default);
    let board = use_signal(ScoreBoard::new);

    // Seed the board from the store once on mount. A failed load already
    // resolved to the zero defaults inside the service.
    use_future(move || {
        let scores = ctx.scores();
        let mut board = board;
        async move {
            let loaded = scores.initial_board().await;
            board.set(loaded);
        }
    });

    match session().current() {
        None => rsx! {
            PickerView {
                on_select: move |identity| session.with_mut(|s| s.select(identity)),
            }
        },
        Some(identity) => rsx! {
            DashboardView { identity, board }
        },
    }
}
