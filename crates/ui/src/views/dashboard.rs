#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use score_core::model::{Identity, ScoreBoard, Session};
use services::SaveOutcome;

use crate::context::AppContext;
use crate::vm::{format_points, map_leaderboard_rows};

/// Fixed step for the add/remove buttons.
const STEP: i64 = 1_000;
/// The penalty, gated behind a confirmation dialog.
const PENALTY: i64 = -100_000;

/// Everything a button on the dashboard can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DashboardIntent {
    Add,
    Remove,
    RequestPenalty,
    CancelPenalty,
    ConfirmPenalty,
    DismissSaveError,
}

#[component]
pub fn DashboardView(identity: Identity, board: Signal<ScoreBoard>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut show_penalty_confirm = use_signal(|| false);
    let mut save_error = use_signal(|| false);

    // Drain save outcomes for the lifetime of the dashboard; a failed write
    // raises the one-shot notice. The local score is never rolled back.
    let ctx_for_outcomes = ctx.clone();
    use_future(move || {
        let ctx = ctx_for_outcomes.clone();
        let mut save_error = save_error;
        async move {
            let Some(mut outcomes) = ctx.take_save_outcomes() else {
                return;
            };
            while let Some(outcome) = outcomes.recv().await {
                if matches!(outcome, SaveOutcome::Failed { .. }) {
                    save_error.set(true);
                }
            }
        }
    });

    let scores = ctx.scores();
    let apply = use_callback(move |amount: i64| {
        let mut board = board;
        board.with_mut(|b| {
            // The dashboard only exists once an identity is selected, so the
            // no-session branch cannot be reached from here.
            let _ = scores.apply_delta(Session::Selected(identity), b, amount);
        });
    });

    let dispatch = use_callback(move |intent: DashboardIntent| match intent {
        DashboardIntent::Add => apply.call(STEP),
        DashboardIntent::Remove => apply.call(-STEP),
        DashboardIntent::RequestPenalty => show_penalty_confirm.set(true),
        DashboardIntent::CancelPenalty => show_penalty_confirm.set(false),
        DashboardIntent::ConfirmPenalty => {
            show_penalty_confirm.set(false);
            apply.call(PENALTY);
        }
        DashboardIntent::DismissSaveError => save_error.set(false),
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(dispatch, board);
            }
        }
    }

    let rows = map_leaderboard_rows(&board.read(), identity);
    let own_points = format_points(board.read().score(identity));

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                img { class: "logo-small", src: asset!("/assets/logo.svg") }
                h1 { class: "dashboard-title", "Scoreboard" }
            }
            p { class: "welcome", "Hello, {identity}!" }

            section { class: "leaderboard",
                h2 { class: "section-title", "Leaderboard" }
                for row in rows {
                    div {
                        key: "{row.name}",
                        class: "leaderboard-row",
                        class: if row.is_current { "current" },
                        span { class: "rank", "#{row.rank}" }
                        span { class: "name", "{row.name}" }
                        span { class: "points", "₹ {row.points_str}" }
                    }
                }
            }

            section { class: "balance",
                p { class: "balance-label", "Your Score" }
                p { class: "balance-value", "₹ {own_points}" }
            }

            div { class: "controls",
                button {
                    class: "btn add",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DashboardIntent::Add),
                    "+ Add 1,000"
                }
                button {
                    class: "btn remove",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DashboardIntent::Remove),
                    "- Remove 1,000"
                }
                button {
                    class: "btn penalty",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DashboardIntent::RequestPenalty),
                    "Take the penalty"
                }
            }

            if show_penalty_confirm() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| dispatch.call(DashboardIntent::CancelPenalty),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Apply the penalty?" }
                        p { class: "modal-body",
                            "This immediately deducts ₹ 100,000 from your score."
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn modal-cancel",
                                r#type: "button",
                                onclick: move |_| dispatch.call(DashboardIntent::CancelPenalty),
                                "Cancel"
                            }
                            button {
                                class: "btn modal-confirm",
                                r#type: "button",
                                onclick: move |_| dispatch.call(DashboardIntent::ConfirmPenalty),
                                "Deduct"
                            }
                        }
                    }
                }
            }

            if save_error() {
                div { class: "modal-overlay",
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Error" }
                        p { class: "modal-body",
                            "Could not save to the scoreboard. Your local score is kept."
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn modal-confirm",
                                r#type: "button",
                                onclick: move |_| dispatch.call(DashboardIntent::DismissSaveError),
                                "OK"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shared handles letting tests drive the dashboard the way its buttons do.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DashboardIntent>>>>,
    board: Rc<RefCell<Option<Signal<ScoreBoard>>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DashboardIntent>, board: Signal<ScoreBoard>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.board.borrow_mut() = Some(board);
    }

    pub(crate) fn dispatch(&self) -> Callback<DashboardIntent> {
        (*self.dispatch.borrow()).expect("dashboard not mounted")
    }

    pub(crate) fn board(&self) -> Signal<ScoreBoard> {
        (*self.board.borrow()).expect("dashboard not mounted")
    }
}
