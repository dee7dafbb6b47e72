//! Frame-driven sweep of a function from left to right.
//!
//! The [`Animator`] owns at most one session. Every start issues a fresh
//! [`SessionToken`]; the host passes the token back with each frame, and a
//! frame carrying a superseded token is ignored without touching the point
//! sequence.

use std::time::Duration;

use log::{debug, trace};

use crate::eval::Evaluator;
use crate::sample::{Sample, classify};
use crate::sequence::PointSequence;
use crate::transform::Transform;

/// Identifies one animation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(u64);

/// Lifecycle of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// No session was started.
    Idle,
    /// Frames advance the sweep.
    Running,
    /// The sweep reached the end of the domain or hit an undefined value.
    Completed,
    /// The sweep was stopped from outside.
    Cancelled,
}

/// Result of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The sweep advanced; the host should schedule another frame.
    Continue,
    /// The sweep finished during this frame.
    Completed,
    /// The frame belonged to a cancelled or finished session and did nothing.
    Stale,
}

/// Inputs a frame samples with.
pub struct FrameParams<'a, E: ?Sized> {
    /// The compiled function.
    pub evaluator: &'a E,
    /// Current coordinate mapping.
    pub transform: &'a Transform,
    /// Smallest X advance per frame.
    pub min_step: f64,
    /// Sweep speed in pixels per second.
    pub speed_px_per_sec: f64,
}

#[derive(Debug, Clone, Copy)]
struct Session {
    token: SessionToken,
    status: AnimationStatus,
    last_timestamp: Duration,
    x: f64,
}

/// State machine driving one sweep at a time.
#[derive(Debug, Default)]
pub struct Animator {
    next_token: u64,
    session: Option<Session>,
}

impl Animator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a sweep at `x`, superseding any running session.
    ///
    /// `now` is the frame clock reading the first frame measures from.
    pub fn start(&mut self, x: f64, now: Duration) -> SessionToken {
        self.cancel();
        self.next_token += 1;
        let token = SessionToken(self.next_token);
        self.session = Some(Session {
            token,
            status: AnimationStatus::Running,
            last_timestamp: now,
            x,
        });
        debug!("animation session {} started at x = {x}", token.0);
        token
    }

    /// Stop the running session, if any. Pending frames become no-ops.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.status == AnimationStatus::Running {
                session.status = AnimationStatus::Cancelled;
                debug!("animation session {} cancelled", session.token.0);
            }
        }
    }

    /// Forget the session entirely.
    pub fn reset(&mut self) {
        self.cancel();
        self.session = None;
    }

    /// Status of the current session.
    pub fn status(&self) -> AnimationStatus {
        self.session
            .map_or(AnimationStatus::Idle, |session| session.status)
    }

    /// Whether a sweep is in flight.
    pub fn is_running(&self) -> bool {
        self.status() == AnimationStatus::Running
    }

    /// Token of the running session.
    pub fn active_token(&self) -> Option<SessionToken> {
        self.session
            .filter(|session| session.status == AnimationStatus::Running)
            .map(|session| session.token)
    }

    /// Next X the current session samples.
    pub fn current_x(&self) -> Option<f64> {
        self.session.map(|session| session.x)
    }

    /// Advance the session identified by `token` to the frame time `now`.
    ///
    /// The X step is derived from the time since the previous frame and the
    /// sweep speed, never below `min_step`. An undefined value completes the
    /// sweep; a value outside the window only ends the current stroke.
    pub fn frame<E>(
        &mut self,
        token: SessionToken,
        now: Duration,
        params: FrameParams<'_, E>,
        sequence: &mut PointSequence,
    ) -> FrameOutcome
    where
        E: Evaluator + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return FrameOutcome::Stale;
        };
        if session.token != token || session.status != AnimationStatus::Running {
            return FrameOutcome::Stale;
        }

        let transform = params.transform;
        let elapsed = now.saturating_sub(session.last_timestamp);
        session.last_timestamp = now;
        let pixel_step = params.speed_px_per_sec.max(0.0) * elapsed.as_secs_f64();
        let x_step = transform.x_step_for_pixels(pixel_step).max(params.min_step);

        match classify(params.evaluator, session.x, transform) {
            Sample::Invalid => {
                session.status = AnimationStatus::Completed;
                debug!(
                    "animation session {} stopped: undefined at x = {}",
                    token.0, session.x
                );
                return FrameOutcome::Completed;
            }
            Sample::OutOfView => sequence.push_break(),
            Sample::Valid { point, .. } => {
                if let Err(err) = sequence.push_point(point) {
                    debug!("dropping sample at x = {}: {err}", point.x);
                }
            }
        }

        session.x += x_step;
        sequence.set_resume_x(session.x);
        trace!(
            "frame {:?}: x = {}, step = {x_step}, points = {}",
            now,
            session.x,
            sequence.len()
        );

        if session.x >= transform.viewport().x.max {
            session.status = AnimationStatus::Completed;
            debug!("animation session {} swept the full domain", token.0);
            FrameOutcome::Completed
        } else {
            FrameOutcome::Continue
        }
    }
}
