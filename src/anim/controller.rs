use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use tracing::{debug, trace, warn};

use crate::anim::frame::{Frame, RunState};
use crate::core::ecdf::ecdf;
use crate::core::generate::SampleSet;
use crate::error::RunError;

/// Padding around the union of all samples so the curve never touches the
/// axis edge. Every frame of a run shares the padded range.
const X_MARGIN: f64 = 5.0;

/// Walks the periods of one sample set in order, emitting a frame per
/// period. Cancellation is cooperative: the stop flag is read once per
/// frame boundary, so latency is bounded by one frame delay.
pub struct FrameController {
    samples: Arc<SampleSet>,
    state: RunState,
    position: usize,
    x_range: (f64, f64),
    stop: Arc<AtomicBool>,
}

impl FrameController {
    pub fn new(samples: Arc<SampleSet>) -> Self {
        Self {
            samples,
            state: RunState::Idle,
            position: 0,
            x_range: (0.0, 0.0),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Emitted fraction of the timeline, in [0, 1].
    pub fn progress(&self) -> f64 {
        let n = self.samples.period_count();
        if n == 0 {
            return 0.0;
        }
        self.position as f64 / n as f64
    }

    /// Shared handle for signalling stop from another thread (Ctrl-C
    /// handler, UI button). Observed at the next frame boundary.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Begin a run from the first period. Valid from Idle, Cancelled or
    /// Completed; re-arms the stop flag and fixes the axis range once for
    /// the whole run.
    pub fn start(&mut self) {
        let (lo, hi) = self.samples.value_range().unwrap_or((0.0, 0.0));
        self.x_range = (lo - X_MARGIN, hi + X_MARGIN);
        self.position = 0;
        self.stop.store(false, Ordering::SeqCst);
        self.state = if self.samples.period_count() == 0 {
            RunState::Completed
        } else {
            RunState::Running
        };
        debug!(periods = self.samples.period_count(), "run started");
    }

    /// Emit the next frame in period order.
    ///
    /// Returns `Ok(None)` once the run is no longer Running: either every
    /// period has been emitted (Completed) or the stop flag was observed
    /// at this boundary (Cancelled). A statistics failure cancels the run
    /// and surfaces the error; no default frame is substituted.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, RunError> {
        if self.state != RunState::Running {
            return Ok(None);
        }
        if self.stop.load(Ordering::SeqCst) {
            self.state = RunState::Cancelled;
            debug!(position = self.position, "stop observed, run cancelled");
            return Ok(None);
        }

        let idx = self.position;
        let period = self.samples.periods()[idx];
        let curve = match ecdf(self.samples.samples(idx)) {
            Ok(curve) => curve,
            Err(err) => {
                self.state = RunState::Cancelled;
                warn!(period, %err, "frame computation failed, run cancelled");
                return Err(err.into());
            }
        };

        self.position += 1;
        if self.position == self.samples.period_count() {
            self.state = RunState::Completed;
        }

        Ok(Some(Frame {
            period,
            curve,
            sample_count: self.samples.sample_count(),
            x_range: self.x_range,
            progress: self.progress(),
            status: format!("Showing year: {period}"),
        }))
    }

    /// Run the full timeline on the calling thread, pacing frames by
    /// `delay` and publishing them into `tx`.
    ///
    /// The delay is a floor on inter-frame spacing, not a ceiling: sends
    /// block when the consumer lags, stretching the gap rather than
    /// skipping or reordering frames. Returns the terminal state.
    pub fn run_paced(&mut self, delay: Duration, tx: &Sender<Frame>) -> Result<RunState, RunError> {
        self.start();
        let mut next_deadline = Instant::now();
        loop {
            next_deadline += delay;
            let Some(frame) = self.next_frame()? else { break };
            let finished = self.state != RunState::Running;
            if tx.send(frame).is_err() {
                // Receiver hung up: nobody is watching the run anymore.
                self.state = RunState::Cancelled;
                debug!("frame receiver dropped, run cancelled");
                break;
            }
            if finished {
                break;
            }
            let now = Instant::now();
            if now < next_deadline {
                thread::sleep(next_deadline - now);
            } else {
                next_deadline = now;
                trace!("frame pacing overrun");
            }
        }
        Ok(self.state)
    }
}
