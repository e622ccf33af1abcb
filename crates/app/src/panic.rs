use crate::notify;
use dioxus::prelude::*;
use shared_types::{PanicAlert, PanicStatus, PanicTimings};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Walk a cycle's schedule: wait out the gap before each step, then report
/// the elapsed offset so the state machine can fire it.
async fn run_schedule<F, Fut>(timings: PanicTimings, mut wait: F, mut tick: impl FnMut(Duration))
where
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut elapsed = Duration::ZERO;
    for (due, _) in timings.schedule() {
        wait(due.saturating_sub(elapsed)).await;
        elapsed = due;
        tick(elapsed);
    }
}

/// Dashboard handle on the panic alert.
///
/// Owns at most one pending cycle task. Confirming again cancels the pending
/// task before starting a new one, and the task is cancelled when the
/// owning component unmounts.
#[derive(Clone)]
pub struct PanicController {
    alert: Signal<PanicAlert>,
    timings: PanicTimings,
    pending: Rc<Cell<Option<Task>>>,
}

impl PanicController {
    pub fn status(&self) -> PanicStatus {
        self.alert.read().status()
    }

    pub fn modal_open(&self) -> bool {
        self.alert.read().modal_open()
    }

    pub fn confirm_label(&self) -> &'static str {
        self.alert.read().confirm_label()
    }

    pub fn open(&mut self) {
        tracing::debug!("panic modal opened");
        self.alert.write().open_modal();
    }

    pub fn cancel(&mut self) {
        let alert = self.alert.peek();
        tracing::debug!(
            cycle = alert.cycle(),
            status = alert.status().as_str(),
            "panic modal cancelled"
        );
        drop(alert);
        self.alert.write().cancel();
    }

    pub fn confirm(&mut self) {
        if let Some(task) = self.pending.take() {
            tracing::debug!("cancelling superseded panic cycle");
            task.cancel();
        }

        let cycle = self.alert.write().confirm();
        tracing::info!(cycle, "panic alert confirmed");

        let mut alert = self.alert;
        let timings = self.timings;
        let pending = self.pending.clone();
        let task = spawn(async move {
            run_schedule(timings, sleep, |elapsed| {
                let fired = alert.write().advance(cycle, &timings, elapsed);
                for step in fired {
                    tracing::info!(
                        cycle,
                        status = alert.peek().status().as_str(),
                        "panic status changed"
                    );
                    notify::panic_step(step);
                }
            })
            .await;
            pending.set(None);
        });
        self.pending.set(Some(task));
    }
}

/// Hook creating the dashboard's panic state and its teardown guard.
pub fn use_panic_controller(timings: PanicTimings) -> PanicController {
    let alert = use_signal(PanicAlert::default);
    let pending = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let on_drop = pending.clone();
    use_drop(move || {
        if let Some(task) = on_drop.take() {
            tracing::debug!("dashboard unmounted, cancelling pending panic cycle");
            task.cancel();
        }
    });

    PanicController {
        alert,
        timings,
        pending,
    }
}
