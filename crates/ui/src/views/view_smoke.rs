use std::time::Duration;

use dioxus::prelude::ReadableExt;
use score_core::model::{Identity, ScoreBoard};
use storage::repository::{InMemoryScoreStore, ScoreRow};

use super::dashboard::DashboardIntent;
use super::test_harness::{ViewKind, drive_dom, setup_view_harness, setup_view_harness_with};

#[tokio::test(flavor = "current_thread")]
async fn score_screen_starts_on_the_picker() {
    let store = InMemoryScoreStore::with_rows([("Alok", 10)]);
    let mut harness = setup_view_harness(ViewKind::Screen, store);

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Who are you?"), "missing picker title in {html}");
    for identity in Identity::ALL {
        assert!(
            html.contains(identity.as_str()),
            "missing {identity} button in {html}"
        );
    }

    // Rendering the picker reads from the store but never writes to it.
    assert!(harness.store.writes().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_ranked_leaderboard_and_balance() {
    let mut board = ScoreBoard::new();
    board.set_score(Identity::Alok, 500_000);
    board.set_score(Identity::Vikas, 1_200_000);
    board.set_score(Identity::Deep, 999);

    let mut harness = setup_view_harness(
        ViewKind::Dashboard(Identity::Alok, board),
        InMemoryScoreStore::new(),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Hello, Alok!"), "missing greeting in {html}");
    assert!(html.contains("Your Score"), "missing balance label in {html}");

    // Vikas leads, Alok second, Deep last.
    let vikas = html.find("1.2M").expect("Vikas points rendered");
    let alok = html.find("500k").expect("Alok points rendered");
    let deep = html.find("₹ 999").expect("Deep points rendered");
    assert!(vikas < alok && alok < deep, "leaderboard out of order in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_keeps_modals_hidden_until_triggered() {
    let mut harness = setup_view_harness(
        ViewKind::Dashboard(Identity::Deep, ScoreBoard::new()),
        InMemoryScoreStore::new(),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Take the penalty"), "missing penalty button in {html}");
    assert!(
        !html.contains("Apply the penalty?"),
        "confirmation should not show before the button is pressed: {html}"
    );
    assert!(!html.contains("Could not save"), "error modal leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn penalty_is_gated_behind_the_confirmation_dialog() {
    let mut board = ScoreBoard::new();
    board.set_score(Identity::Alok, 50_000);

    let mut harness = setup_view_harness_with(
        ViewKind::Dashboard(Identity::Alok, board),
        InMemoryScoreStore::with_rows([("Alok", 50_000)]),
        Duration::from_millis(10),
    );
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.handles.dispatch();
    let board = harness.handles.board();

    // The penalty button only opens the dialog. Nothing is deducted and
    // nothing is scheduled for the store.
    dispatch.call(DashboardIntent::RequestPenalty);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Apply the penalty?"), "dialog missing in {html}");
    assert_eq!(board.read().score(Identity::Alok), 50_000);
    assert!(harness.store.writes().is_empty());

    // Cancelling closes the dialog and leaves the score alone.
    dispatch.call(DashboardIntent::CancelPenalty);
    drive_dom(&mut harness.dom);
    assert!(!harness.render().contains("Apply the penalty?"));
    assert_eq!(board.read().score(Identity::Alok), 50_000);
    assert!(harness.store.writes().is_empty());

    // Confirming deducts the full penalty and dismisses the dialog.
    dispatch.call(DashboardIntent::RequestPenalty);
    drive_dom(&mut harness.dom);
    dispatch.call(DashboardIntent::ConfirmPenalty);
    drive_dom(&mut harness.dom);
    assert!(!harness.render().contains("Apply the penalty?"));
    assert_eq!(board.read().score(Identity::Alok), -50_000);

    // The deducted value reaches the store once the write window elapses.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(
        harness.store.writes(),
        vec![ScoreRow {
            name: "Alok".into(),
            points: -50_000
        }]
    );
}
