use super::animator::Animator;
use super::particle::ParticleView;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Receives one frame after every tick.
pub trait RedrawSink: Send + 'static {
    fn redraw(&mut self, frame: &[ParticleView]);
}

/// Keeps the most recent frame so a renderer can paint before the next tick.
#[derive(Clone, Default)]
pub struct LatestFrame {
    frame: Arc<Mutex<Vec<ParticleView>>>,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<ParticleView> {
        self.frame
            .lock()
            .map(|frame| frame.clone())
            .unwrap_or_default()
    }
}

impl RedrawSink for LatestFrame {
    fn redraw(&mut self, frame: &[ParticleView]) {
        if let Ok(mut latest) = self.frame.lock() {
            latest.clear();
            latest.extend_from_slice(frame);
        }
    }
}

/// Handle to the repeating animation loop. Stopping it, or dropping it,
/// ends the loop before its next tick.
pub struct AnimationTask<R = StdRng> {
    stop: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<Animator<R>>>,
}

impl<R> AnimationTask<R>
where
    R: Rng + Send + 'static,
{
    pub fn spawn<S: RedrawSink>(handle: &Handle, animator: Animator<R>, sink: S) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let join = handle.spawn(run_animation(animator, sink, stop_rx));
        log::info!("Animation task started ({} ms ticks)", TICK_INTERVAL.as_millis());
        AnimationTask {
            stop: Some(stop_tx),
            join: Some(join),
        }
    }

    /// Stops the loop and hands back the animator in its final state.
    pub async fn stop(mut self) -> Option<Animator<R>> {
        self.signal_stop();
        let join = self.join.take()?;
        match join.await {
            Ok(animator) => Some(animator),
            Err(e) => {
                log::error!("Animation task ended abnormally: {}", e);
                None
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl<R> AnimationTask<R> {
    fn signal_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The receiver is gone only if the loop already ended.
            let _ = stop.send(());
            log::info!("Animation task stopping");
        }
    }
}

impl<R> Drop for AnimationTask<R> {
    fn drop(&mut self) {
        self.signal_stop();
    }
}

async fn run_animation<R, S>(
    mut animator: Animator<R>,
    mut sink: S,
    mut stop: oneshot::Receiver<()>,
) -> Animator<R>
where
    R: Rng,
    S: RedrawSink,
{
    loop {
        animator.tick();
        sink.redraw(&animator.frame());

        // A dropped sender counts as a stop request too.
        tokio::select! {
            _ = &mut stop => break,
            _ = tokio::time::sleep(TICK_INTERVAL) => {}
        }
    }
    animator
}
