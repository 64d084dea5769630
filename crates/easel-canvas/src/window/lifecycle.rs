use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::ThreadId;
use std::time::{Duration, Instant};

/// Phase of the window bring-up handshake.
#[derive(Debug)]
pub(crate) enum Phase<T> {
    /// Bootstrap spawned, no signal yet.
    Requested,
    /// Window live; the payload carries the caller-side capabilities.
    Ready(T),
    /// Bring-up failed; terminal.
    Failed(String),
    /// The window was closed after being ready; terminal.
    Closed,
}

/// Result of [`Gate::wait_ready`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WaitOutcome<T> {
    Ready(T),
    Failed(String),
    TimedOut,
    Closed,
}

/// One-shot readiness handshake between the initializing caller and the
/// UI-thread bootstrap.
///
/// The bootstrap signals exactly once (ready or failed); the caller blocks on
/// the condvar with a bounded budget instead of polling. A later close
/// transition is the only write after the initial signal.
#[derive(Debug)]
pub(crate) struct Gate<T> {
    phase: Mutex<Phase<T>>,
    signal: Condvar,
}

impl<T: Clone> Gate<T> {
    pub fn new() -> Self {
        Self {
            phase: Mutex::new(Phase::Requested),
            signal: Condvar::new(),
        }
    }

    fn locked(&self) -> MutexGuard<'_, Phase<T>> {
        self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// UI thread: the window exists and can be painted.
    pub fn signal_ready(&self, payload: T) {
        let mut phase = self.locked();
        if matches!(*phase, Phase::Requested) {
            *phase = Phase::Ready(payload);
        }
        self.signal.notify_all();
    }

    /// UI thread: bring-up failed. Overrides readiness, since a bootstrap
    /// error after window creation still leaves the canvas unusable.
    pub fn signal_failed(&self, reason: impl Into<String>) {
        let mut phase = self.locked();
        if !matches!(*phase, Phase::Closed) {
            *phase = Phase::Failed(reason.into());
        }
        self.signal.notify_all();
    }

    /// UI thread: the live window was closed. A recorded failure stays
    /// visible; waiters need the reason more than the close.
    pub fn signal_closed(&self) {
        let mut phase = self.locked();
        if !matches!(*phase, Phase::Failed(_)) {
            *phase = Phase::Closed;
        }
        self.signal.notify_all();
    }

    /// Blocks until the bootstrap signals or `timeout` elapses.
    pub fn wait_ready(&self, timeout: Duration) -> WaitOutcome<T> {
        let deadline = Instant::now() + timeout;
        let mut phase = self.locked();

        loop {
            match &*phase {
                Phase::Ready(payload) => return WaitOutcome::Ready(payload.clone()),
                Phase::Failed(reason) => return WaitOutcome::Failed(reason.clone()),
                Phase::Closed => return WaitOutcome::Closed,
                Phase::Requested => {}
            }

            let now = Instant::now();
            if now >= deadline {
                return WaitOutcome::TimedOut;
            }
            let (guard, _timed_out) = self
                .signal
                .wait_timeout(phase, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            phase = guard;
        }
    }

    /// Current payload, if the gate is in the ready phase.
    pub fn ready_payload(&self) -> Option<T> {
        match &*self.locked() {
            Phase::Ready(payload) => Some(payload.clone()),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.locked(), Phase::Closed)
    }
}

/// Monotonic repaint counter.
///
/// The UI thread bumps it after presenting a frame; synchronous render calls
/// record the counter before requesting a redraw and wait for it to move
/// past that observation.
#[derive(Debug, Default)]
pub(crate) struct FrameSignal {
    frames: Mutex<u64>,
    signal: Condvar,
}

impl FrameSignal {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, u64> {
        self.frames.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> u64 {
        *self.locked()
    }

    /// UI thread: a repaint finished and was presented.
    pub fn bump(&self) {
        *self.locked() += 1;
        self.signal.notify_all();
    }

    /// Blocks until the counter moves past `observed` or `timeout` elapses.
    /// `true` means at least one frame completed after the observation.
    pub fn wait_past(&self, observed: u64, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut frames = self.locked();

        while *frames <= observed {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _timed_out) = self
                .signal
                .wait_timeout(frames, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            frames = guard;
        }
        true
    }
}

/// Caller-side capabilities of the live window.
///
/// winit windows are `Send + Sync`, and `request_redraw` is the only window
/// call ever made off the UI thread; everything else stays with the runtime.
#[derive(Debug, Clone)]
pub(crate) struct WindowLink {
    pub window: Arc<winit::window::Window>,
}

/// State shared between `Canvas` handles and the UI thread.
#[derive(Debug)]
pub(crate) struct WindowShared {
    pub gate: Gate<WindowLink>,
    pub frames: FrameSignal,
    /// Serializes synchronous render requests; overlapping callers queue
    /// here instead of interleaving their waits.
    pub render_serial: Mutex<()>,
    /// Set when the canvas drops; the UI thread exits on its next wake.
    shutdown: AtomicBool,
    /// Identity of the UI thread, recorded by the bootstrap before the gate
    /// opens. Lets render detect it is running inside the click callback.
    ui_thread: Mutex<Option<ThreadId>>,
}

impl WindowShared {
    pub fn new() -> Self {
        Self {
            gate: Gate::new(),
            frames: FrameSignal::new(),
            render_serial: Mutex::new(()),
            shutdown: AtomicBool::new(false),
            ui_thread: Mutex::new(None),
        }
    }

    pub fn mark_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    pub fn set_ui_thread(&self, id: ThreadId) {
        *self.ui_thread.lock().unwrap_or_else(|e| e.into_inner()) = Some(id);
    }

    pub fn is_ui_thread(&self) -> bool {
        *self.ui_thread.lock().unwrap_or_else(|e| e.into_inner())
            == Some(std::thread::current().id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // ── Gate ──────────────────────────────────────────────────────────────

    #[test]
    fn gate_returns_payload_after_ready_signal() {
        let gate = Gate::new();
        gate.signal_ready(42u32);
        assert_eq!(gate.wait_ready(Duration::from_millis(10)), WaitOutcome::Ready(42));
    }

    #[test]
    fn gate_wakes_a_waiting_thread() {
        let gate = Arc::new(Gate::new());

        let signaler = {
            let gate = Arc::clone(&gate);
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(30));
                gate.signal_ready(7u32);
            })
        };

        let outcome = gate.wait_ready(Duration::from_secs(5));
        signaler.join().unwrap();
        assert_eq!(outcome, WaitOutcome::Ready(7));
    }

    #[test]
    fn gate_reports_failure_reason() {
        let gate: Gate<u32> = Gate::new();
        gate.signal_failed("no display");
        assert_eq!(
            gate.wait_ready(Duration::from_millis(10)),
            WaitOutcome::Failed("no display".to_string())
        );
    }

    #[test]
    fn gate_times_out_without_signal() {
        let gate: Gate<u32> = Gate::new();
        assert_eq!(gate.wait_ready(Duration::from_millis(20)), WaitOutcome::TimedOut);
    }

    #[test]
    fn gate_close_is_terminal() {
        let gate = Gate::new();
        gate.signal_ready(1u32);
        gate.signal_closed();

        assert_eq!(gate.wait_ready(Duration::from_millis(10)), WaitOutcome::Closed);
        assert!(gate.ready_payload().is_none());
        assert!(gate.is_closed());
    }

    #[test]
    fn gate_close_does_not_mask_failure() {
        let gate: Gate<u32> = Gate::new();
        gate.signal_failed("adapter missing");
        gate.signal_closed();

        assert_eq!(
            gate.wait_ready(Duration::from_millis(10)),
            WaitOutcome::Failed("adapter missing".to_string())
        );
    }

    #[test]
    fn gate_ready_payload_only_when_ready() {
        let gate = Gate::new();
        assert_eq!(gate.ready_payload(), None::<u32>);
        gate.signal_ready(3u32);
        assert_eq!(gate.ready_payload(), Some(3));
    }

    // ── FrameSignal ───────────────────────────────────────────────────────

    #[test]
    fn frame_signal_sees_completed_frame() {
        let frames = FrameSignal::new();
        let observed = frames.current();
        frames.bump();
        assert!(frames.wait_past(observed, Duration::from_millis(10)));
    }

    #[test]
    fn frame_signal_times_out_without_progress() {
        let frames = FrameSignal::new();
        let observed = frames.current();
        assert!(!frames.wait_past(observed, Duration::from_millis(20)));
    }

    #[test]
    fn frame_signal_wakes_waiting_thread() {
        let frames = Arc::new(FrameSignal::new());
        let observed = frames.current();

        let bumper = {
            let frames = Arc::clone(&frames);
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(30));
                frames.bump();
            })
        };

        assert!(frames.wait_past(observed, Duration::from_secs(5)));
        bumper.join().unwrap();
    }

    // ── WindowShared ──────────────────────────────────────────────────────

    #[test]
    fn shutdown_flag_round_trips() {
        let shared = WindowShared::new();
        assert!(!shared.is_shutdown());
        shared.mark_shutdown();
        assert!(shared.is_shutdown());
    }

    #[test]
    fn ui_thread_identity_check() {
        let shared = WindowShared::new();
        assert!(!shared.is_ui_thread());

        shared.set_ui_thread(std::thread::current().id());
        assert!(shared.is_ui_thread());

        std::thread::scope(|scope| {
            scope.spawn(|| assert!(!shared.is_ui_thread()));
        });
    }
}
