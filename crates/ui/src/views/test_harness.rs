use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use score_core::model::{Identity, ScoreBoard};
use services::{Clock, DebouncedWriter, SaveOutcome, ScoreService};
use storage::repository::InMemoryScoreStore;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::context::{UiApp, build_app_context};
use crate::views::dashboard::DashboardTestHandles;
use crate::views::{DashboardView, ScoreScreen};

struct TestApp {
    scores: Arc<ScoreService>,
    save_outcomes: Mutex<Option<UnboundedReceiver<SaveOutcome>>>,
}

impl UiApp for TestApp {
    fn scores(&self) -> Arc<ScoreService> {
        Arc::clone(&self.scores)
    }

    fn take_save_outcomes(&self) -> Option<UnboundedReceiver<SaveOutcome>> {
        self.save_outcomes.lock().expect("outcomes lock").take()
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Screen,
    Dashboard(Identity, ScoreBoard),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: DashboardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.view == other.view
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    match props.view {
        ViewKind::Screen => rsx! { ScoreScreen {} },
        ViewKind::Dashboard(identity, initial) => rsx! {
            DashboardHarness { identity, initial }
        },
    }
}

#[component]
fn DashboardHarness(identity: Identity, initial: ScoreBoard) -> Element {
    let board = use_signal(move || initial);
    rsx! {
        DashboardView { identity, board }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemoryScoreStore,
    pub handles: DashboardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, store: InMemoryScoreStore) -> ViewHarness {
    setup_view_harness_with(view, store, Duration::from_secs(10))
}

/// Same harness with a caller-chosen write window, so tests that need to see
/// the debounced write land can use one short enough to await for real.
pub fn setup_view_harness_with(
    view: ViewKind,
    store: InMemoryScoreStore,
    window: Duration,
) -> ViewHarness {
    let shared: Arc<dyn storage::repository::ScoreStore> = Arc::new(store.clone());
    let (writer, outcomes) = DebouncedWriter::new(Arc::clone(&shared), window, Clock::default_clock());
    let scores = Arc::new(ScoreService::new(shared, writer));
    let app = Arc::new(TestApp {
        scores,
        save_outcomes: Mutex::new(Some(outcomes)),
    });

    let handles = DashboardTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, store, handles }
}
