//! The mix session state machine.
//!
//! `MixSession` owns the two picks, the last reveal, and at most one
//! outstanding [`DelayTimer`]. When the timer fires, its job resolves the
//! pair captured at trigger time and posts the result back to the session
//! over a channel; the session applies it the next time the owner calls
//! [`MixSession::poll_reveal`] or awaits [`MixSession::next_reveal`].
//! Every firing carries a ticket. A reveal that has already fired is
//! applied before any cancel or re-trigger, so it is never lost; only
//! timers that have not fired yet are dropped, and a ticket that is no
//! longer current is discarded.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use em_core::{Mixer, Resolver, Token};

use crate::config::SessionConfig;
use crate::phase::MixPhase;
use crate::timer::DelayTimer;

/// A revealed combination, tied to the pair it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    /// Left pick captured when the remix was triggered.
    pub left: Token,
    /// Right pick captured when the remix was triggered.
    pub right: Token,
    /// The resolved combination.
    pub result: Token,
}

/// Output of a fired timer, stamped with the remix it belongs to.
#[derive(Debug)]
struct Fired {
    ticket: u64,
    reveal: Reveal,
}

/// The remix currently mixing.
#[derive(Debug)]
struct Pending {
    ticket: u64,
    left: Token,
    right: Token,
    timer: DelayTimer,
}

/// An interactive mix session.
///
/// Dropping the session cancels any outstanding reveal.
#[derive(Debug)]
pub struct MixSession {
    resolver: Arc<Resolver>,
    config: SessionConfig,
    left: Option<Token>,
    right: Option<Token>,
    last_reveal: Option<Reveal>,
    pending: Option<Pending>,
    next_ticket: u64,
    fired_tx: UnboundedSender<Fired>,
    fired_rx: UnboundedReceiver<Fired>,
}

impl MixSession {
    /// Create an empty session.
    pub fn new(resolver: Arc<Resolver>, config: SessionConfig) -> Self {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        Self {
            resolver,
            config,
            left: None,
            right: None,
            last_reveal: None,
            pending: None,
            next_ticket: 0,
            fired_tx,
            fired_rx,
        }
    }

    /// Create an empty session using a mixer's resolver and delay.
    pub fn from_mixer(mixer: &Mixer) -> Self {
        Self::new(Arc::clone(mixer.resolver()), SessionConfig::from_mixer(mixer))
    }

    /// Put `token` in the left slot. Does not affect an in-flight remix.
    pub fn select_left(&mut self, token: impl Into<Token>) {
        let token = token.into();
        debug!(%token, "left selected");
        self.left = Some(token);
    }

    /// Put `token` in the right slot. Does not affect an in-flight remix.
    pub fn select_right(&mut self, token: impl Into<Token>) {
        let token = token.into();
        debug!(%token, "right selected");
        self.right = Some(token);
    }

    /// Current left pick.
    pub fn left(&self) -> Option<&Token> {
        self.left.as_ref()
    }

    /// Current right pick.
    pub fn right(&self) -> Option<&Token> {
        self.right.as_ref()
    }

    /// The most recent reveal, even while a newer remix is mixing.
    pub fn last_reveal(&self) -> Option<&Reveal> {
        self.last_reveal.as_ref()
    }

    /// The most recent result, even while a newer remix is mixing.
    pub fn result(&self) -> Option<&Token> {
        self.last_reveal.as_ref().map(|r| &r.result)
    }

    /// The result to show: the last result, hidden while mixing.
    pub fn displayed_result(&self) -> Option<&Token> {
        if self.is_pending() {
            None
        } else {
            self.result()
        }
    }

    /// Returns true while a reveal timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The pair being mixed, if any.
    pub fn mixing_pair(&self) -> Option<(&Token, &Token)> {
        self.pending.as_ref().map(|p| (&p.left, &p.right))
    }

    /// Returns true if both slots are filled and nothing is mixing.
    ///
    /// [`MixSession::trigger_remix`] still accepts a re-trigger while
    /// mixing; this only reflects whether a remix control should be enabled.
    pub fn can_remix(&self) -> bool {
        self.left.is_some() && self.right.is_some() && !self.is_pending()
    }

    /// Returns true if the shown result was computed from a different pair
    /// than the one currently selected.
    pub fn is_stale(&self) -> bool {
        self.last_reveal.as_ref().is_some_and(|reveal| {
            self.left.as_ref() != Some(&reveal.left) || self.right.as_ref() != Some(&reveal.right)
        })
    }

    /// Derive the display phase.
    pub fn phase(&self) -> MixPhase {
        match (&self.left, &self.right) {
            (Some(_), Some(_)) => {
                if self.is_pending() {
                    MixPhase::Mixing
                } else if self.last_reveal.is_some() {
                    MixPhase::Revealed
                } else {
                    MixPhase::Ready
                }
            }
            (None, None) if self.last_reveal.is_none() && !self.is_pending() => MixPhase::Idle,
            _ => MixPhase::AwaitingInput,
        }
    }

    /// Status line for the result panel.
    pub fn status_line(&self) -> String {
        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            return "Choose two emojis to get started.".to_string();
        };
        if self.is_pending() {
            return "Remixing your combo...".to_string();
        }
        match self.result() {
            Some(result) => format!("{left} + {right} → {result}"),
            None => "Hit remix to see the magic.".to_string(),
        }
    }

    /// Start mixing the current pair.
    ///
    /// Any outstanding remix is cancelled first; if its timer has already
    /// fired, its reveal is applied instead. The pair is captured now;
    /// later selections do not change what this remix reveals. Returns
    /// false and does nothing if either slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn trigger_remix(&mut self) -> bool {
        let (Some(left), Some(right)) = (self.left.clone(), self.right.clone()) else {
            debug!("remix ignored: a slot is empty");
            return false;
        };

        self.cancel();

        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = self.next_ticket;
        let resolver = Arc::clone(&self.resolver);
        let (job_left, job_right) = (left.clone(), right.clone());
        let timer = DelayTimer::schedule(self.config.mix_delay, self.fired_tx.clone(), move || {
            let result = resolver.resolve(&job_left, &job_right);
            Fired {
                ticket,
                reveal: Reveal {
                    left: job_left,
                    right: job_right,
                    result,
                },
            }
        });

        debug!(
            ticket,
            %left,
            %right,
            delay_ms = self.config.mix_delay.as_millis() as u64,
            "remix scheduled"
        );
        self.pending = Some(Pending {
            ticket,
            left,
            right,
            timer,
        });
        true
    }

    /// Cancel the outstanding remix, if any. Returns true if a timer was
    /// stopped before it fired.
    ///
    /// A reveal that has already fired is applied, not dropped, and the call
    /// then returns false.
    pub fn cancel(&mut self) -> bool {
        self.poll_reveal();
        match self.pending.take() {
            Some(pending) => {
                debug!(ticket = pending.ticket, "remix cancelled");
                pending.timer.cancel();
                true
            }
            None => false,
        }
    }

    /// Apply any reveal that has already fired, without waiting.
    pub fn poll_reveal(&mut self) -> Option<Reveal> {
        while let Ok(fired) = self.fired_rx.try_recv() {
            if let Some(reveal) = self.apply(fired) {
                return Some(reveal);
            }
        }
        None
    }

    /// Wait for the outstanding remix to reveal and apply it.
    ///
    /// Returns `None` at once if nothing is mixing. Cancel-safe: if the
    /// future is dropped before completing, the reveal stays queued.
    pub async fn next_reveal(&mut self) -> Option<Reveal> {
        while self.pending.is_some() {
            let fired = self.fired_rx.recv().await?;
            if let Some(reveal) = self.apply(fired) {
                return Some(reveal);
            }
        }
        None
    }

    fn apply(&mut self, fired: Fired) -> Option<Reveal> {
        if self.pending.as_ref().map(|p| p.ticket) != Some(fired.ticket) {
            debug!(ticket = fired.ticket, "discarding stale reveal");
            return None;
        }

        self.pending = None;
        info!(
            left = %fired.reveal.left,
            right = %fired.reveal.right,
            result = %fired.reveal.result,
            "remix revealed"
        );
        self.last_reveal = Some(fired.reveal.clone());
        Some(fired.reveal)
    }
}
