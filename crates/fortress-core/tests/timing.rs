//! Virtual-time tests for the periodic behaviors
//!
//! All tests run on a paused tokio clock, so multi-second schedules finish
//! instantly and timestamps are exact.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::{spawn_local, LocalSet};
use tokio::time::{sleep, Instant};

use fortress_core::config::{FortressConfig, MetricsConfig, RevealConfig, ServerStatusConfig};
use fortress_core::copy::show_feedback;
use fortress_core::easter_egg::KONAMI_SEQUENCE;
use fortress_core::menu::NavLayout;
use fortress_core::metrics::{default_gauges, FixedJitter};
use fortress_core::page::{self, InputGates, PageHandle};
use fortress_core::schedule;
use fortress_core::{
    AppState, CopyFeedback, GroupKind, ItemPhase, MetricsSimulator, ServerUnit, StaggerPlan,
    Subscription,
};

const MS: Duration = Duration::from_millis(1);

#[derive(Clone)]
struct SharedPage {
    state: Rc<RefCell<AppState>>,
    gates: Rc<RefCell<InputGates>>,
}

impl SharedPage {
    fn new(config: FortressConfig) -> Self {
        let units = vec![ServerUnit::new("nextcloud"), ServerUnit::new("jellyfin")];
        Self {
            state: Rc::new(RefCell::new(AppState::new(config, units, Some(11)))),
            gates: Rc::new(RefCell::new(InputGates::new())),
        }
    }
}

impl PageHandle for SharedPage {
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    fn with_gates<R>(&self, f: impl FnOnce(&mut InputGates) -> R) -> R {
        f(&mut self.gates.borrow_mut())
    }
}

#[tokio::test(start_paused = true)]
async fn metrics_tick_every_three_seconds() {
    let sim = Rc::new(RefCell::new(MetricsSimulator::new(
        default_gauges(),
        FixedJitter(3.0),
        MetricsConfig::default(),
    )));
    let token = sim.borrow_mut().start().expect("not running yet");
    let period = sim.borrow().config().period();

    let origin = Instant::now();
    let tick_times = Rc::new(RefCell::new(Vec::new()));

    let driver = {
        let sim = sim.clone();
        let tick_times = tick_times.clone();
        schedule::every(period, token, move || {
            let readings = sim.borrow_mut().tick();
            assert_eq!(readings[0].label, "45%");
            tick_times.borrow_mut().push(origin.elapsed());
            if tick_times.borrow().len() == 3 {
                sim.borrow_mut().stop();
            }
        })
    };
    driver.await;

    assert_eq!(
        *tick_times.borrow(),
        vec![
            Duration::from_secs(3),
            Duration::from_secs(6),
            Duration::from_secs(9)
        ]
    );
    assert_eq!(sim.borrow().ticks(), 3);
    assert!(!sim.borrow().is_running());
}

#[tokio::test(start_paused = true)]
async fn no_ticks_after_cancel() {
    let subscription = Subscription::new("clock");
    subscription.cancel();

    let mut calls = 0;
    schedule::every(Duration::from_secs(1), subscription.token(), || calls += 1).await;
    assert_eq!(calls, 0);
}

#[tokio::test(start_paused = true)]
async fn stagger_plays_on_schedule() {
    let plan = StaggerPlan::new(GroupKind::StatBoxes, 4, &RevealConfig::default());
    let subscription = Subscription::new("stagger");
    let origin = Instant::now();
    let log = Mutex::new(Vec::new());

    let delivered = plan
        .play(&subscription.token(), |index, phase| {
            log.lock().push((origin.elapsed(), index, phase));
        })
        .await;

    assert_eq!(delivered, 8);
    let log = log.into_inner();
    for index in 0..4 {
        let pre = log
            .iter()
            .find(|(_, i, p)| *i == index && *p == ItemPhase::Pre)
            .unwrap();
        let revealed = log
            .iter()
            .find(|(_, i, p)| *i == index && *p == ItemPhase::Revealed)
            .unwrap();
        assert_eq!(pre.0, Duration::from_millis(100 * index as u64));
        assert_eq!(revealed.0, pre.0 + Duration::from_millis(50));
    }
}

#[tokio::test(start_paused = true)]
async fn resize_burst_applies_only_last_width() {
    let page = SharedPage::new(FortressConfig::default());
    page.state.borrow_mut().menu.toggle();

    LocalSet::new()
        .run_until(async {
            let origin = Instant::now();
            let mut handles = Vec::new();
            // Events at 0, 100 and 300ms, all wide enough to close the menu
            for (gap_ms, width) in [(0u64, 900.0), (100, 1000.0), (200, 1024.0)] {
                sleep(Duration::from_millis(gap_ms)).await;
                let page = page.clone();
                handles.push(spawn_local(async move { page::settle_resize(&page, width).await }));
            }

            let last = handles.pop().unwrap();
            sleep(Duration::from_millis(549) - origin.elapsed()).await;
            assert!(page.state.borrow().menu.is_open());

            assert!(last.await.unwrap());
            assert_eq!(origin.elapsed(), Duration::from_millis(550));
            assert!(!page.state.borrow().menu.is_open());
            assert_eq!(page.state.borrow().menu.layout(), NavLayout::Desktop);

            for superseded in handles {
                assert!(!superseded.await.unwrap());
            }
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn fortress_mode_reverts_after_three_seconds() {
    let page = SharedPage::new(FortressConfig::default());

    LocalSet::new()
        .run_until(async {
            let (last, prefix) = KONAMI_SEQUENCE.split_last().unwrap();
            for key in prefix {
                assert!(!page::press_key(&page, key).await);
            }

            let origin = Instant::now();
            let task = {
                let page = page.clone();
                let key = *last;
                spawn_local(async move { page::press_key(&page, key).await })
            };

            sleep(Duration::from_secs(3) - MS).await;
            assert!(page.state.borrow().easter_egg.is_active());

            assert!(task.await.unwrap());
            assert_eq!(origin.elapsed(), Duration::from_secs(3));
            assert!(!page.state.borrow().easter_egg.is_active());
            assert_eq!(page.state.borrow().active_subscriptions(), 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn fortress_mode_stays_on_when_torn_down() {
    let page = SharedPage::new(FortressConfig::default());

    LocalSet::new()
        .run_until(async {
            let (last, prefix) = KONAMI_SEQUENCE.split_last().unwrap();
            for key in prefix {
                page::press_key(&page, key).await;
            }
            let task = {
                let page = page.clone();
                let key = *last;
                spawn_local(async move { page::press_key(&page, key).await })
            };

            sleep(Duration::from_secs(1)).await;
            page.state.borrow_mut().teardown();
            assert!(!task.await.unwrap());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn offline_unit_restores_after_offline_period() {
    let config = FortressConfig {
        server_status: ServerStatusConfig {
            flicker_chance: 1.0,
            ..ServerStatusConfig::default()
        },
        ..FortressConfig::default()
    };
    let page = SharedPage::new(config);
    let index = page::check_servers(&page).expect("flicker chance is 1");
    assert!(!page.state.borrow().servers.units()[index].led_active);

    LocalSet::new()
        .run_until(async {
            let token = page.state.borrow_mut().subscribe("server-status");
            let origin = Instant::now();
            let task = {
                let page = page.clone();
                spawn_local(async move { page::restore_unit(&page, index, &token).await })
            };

            sleep(Duration::from_secs(2) - MS).await;
            assert!(!page.state.borrow().servers.units()[index].led_active);

            assert!(task.await.unwrap());
            assert_eq!(origin.elapsed(), Duration::from_secs(2));
            assert!(page.state.borrow().servers.units()[index].led_active);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn copy_label_reverts_after_two_seconds() {
    let label = Rc::new(Cell::new(CopyFeedback::Idle));

    LocalSet::new()
        .run_until(async {
            let origin = Instant::now();
            let task = {
                let label = label.clone();
                spawn_local(show_feedback(
                    CopyFeedback::Copied,
                    Duration::from_secs(2),
                    move |feedback| label.set(feedback),
                ))
            };

            sleep(Duration::from_secs(2) - MS).await;
            assert_eq!(label.get().label(), "✓ Copied!");

            task.await.unwrap();
            assert_eq!(origin.elapsed(), Duration::from_secs(2));
            assert_eq!(label.get().label(), "Copy");
        })
        .await;
}
