//! Modal session state machine.
//!
//! One `SessionState` spans the lifetime from "game selected, modal opened"
//! to "modal closed". The script runtime handle itself lives in the modal
//! component; this reducer only tracks which phase the loader is in, whether
//! a run is outstanding, and the latest captured output.
//!
//! `epoch` is the liveness token for both asynchronous operations. `Open` and
//! `Close` advance it; every completion action carries the epoch captured when
//! the operation started. A completion whose epoch no longer matches belongs
//! to a superseded session and is dropped without touching state.

use crate::model::GameRecord;
use std::rc::Rc;
use yew::Reducible;

/// User-facing message for a failed runtime acquisition. Deliberately generic;
/// the raw error only goes to the console.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to initialize Python environment";

/// Result of one run. Superseded wholesale by the next run, never appended to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Success(String),
    Failure(String),
}

/// Runtime Loader phases: `Idle -> Loading -> {Ready, Failed}`. The only way
/// out of `Ready`/`Failed` is session teardown back to `Idle`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimePhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub game: Option<GameRecord>,
    pub phase: RuntimePhase,
    pub run_in_flight: bool,
    pub output: Option<ExecutionOutcome>,
    pub fullscreen: bool,
    pub muted: bool,
    pub epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            game: None,
            phase: RuntimePhase::Idle,
            run_in_flight: false,
            output: None,
            fullscreen: false,
            muted: false,
            epoch: 0,
        }
    }
}

impl SessionState {
    /// True while the run trigger should do something. Gates both the button
    /// state and the run callback itself.
    pub fn can_run(&self) -> bool {
        self.phase == RuntimePhase::Ready && !self.run_in_flight
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    /// A game was selected; tears down any prior session and starts loading.
    Open(GameRecord),
    /// Modal dismissed; everything returns to its initial value.
    Close,
    RuntimeReady { epoch: u64 },
    RuntimeFailed { epoch: u64 },
    /// A run was accepted; clears prior output so stale text is never shown
    /// while the new run is in flight.
    RunStarted,
    RunFinished { epoch: u64, result: Result<String, String> },
    SetFullscreen(bool),
    ToggleMute,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            Open(game) => {
                new = SessionState {
                    game: Some(game),
                    phase: RuntimePhase::Loading,
                    epoch: self.epoch + 1,
                    ..SessionState::default()
                };
            }
            Close => {
                new = SessionState {
                    epoch: self.epoch + 1,
                    ..SessionState::default()
                };
            }
            RuntimeReady { epoch } => {
                // Stale or duplicate acquisition; never mutate a newer session.
                if epoch != self.epoch || self.phase != RuntimePhase::Loading {
                    return self;
                }
                new.phase = RuntimePhase::Ready;
            }
            RuntimeFailed { epoch } => {
                if epoch != self.epoch || self.phase != RuntimePhase::Loading {
                    return self;
                }
                new.phase = RuntimePhase::Failed;
            }
            RunStarted => {
                if !self.can_run() {
                    return self;
                }
                new.run_in_flight = true;
                new.output = None;
            }
            RunFinished { epoch, result } => {
                if epoch != self.epoch || !self.run_in_flight {
                    return self;
                }
                new.run_in_flight = false;
                new.output = Some(match result {
                    Ok(text) => ExecutionOutcome::Success(text),
                    Err(msg) => ExecutionOutcome::Failure(msg),
                });
            }
            SetFullscreen(on) => {
                new.fullscreen = on;
            }
            ToggleMute => {
                new.muted = !new.muted;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_games;

    fn reduce(state: Rc<SessionState>, action: SessionAction) -> Rc<SessionState> {
        Reducible::reduce(state, action)
    }

    fn open_game(n: usize) -> (Rc<SessionState>, u64) {
        let state = reduce(
            Rc::new(SessionState::default()),
            SessionAction::Open(default_games().remove(n)),
        );
        let epoch = state.epoch;
        (state, epoch)
    }

    fn ready_session() -> (Rc<SessionState>, u64) {
        let (state, epoch) = open_game(0);
        (reduce(state, SessionAction::RuntimeReady { epoch }), epoch)
    }

    #[test]
    fn open_starts_loading() {
        let (state, _) = open_game(0);
        assert_eq!(state.phase, RuntimePhase::Loading);
        assert_eq!(state.game.as_ref().unwrap().title, "MiniCat");
        assert!(state.output.is_none());
        assert!(!state.run_in_flight);
    }

    #[test]
    fn stale_acquisition_cannot_touch_a_newer_session() {
        // Open A, then open B before A's acquisition resolves.
        let (state, epoch_a) = open_game(0);
        let state = reduce(state, SessionAction::Open(default_games().remove(1)));
        assert_eq!(state.game.as_ref().unwrap().title, "Trial and Error");

        // A's late completion must not flip B's loader to Ready or Failed.
        let state = reduce(state, SessionAction::RuntimeReady { epoch: epoch_a });
        assert_eq!(state.phase, RuntimePhase::Loading);
        let state = reduce(state, SessionAction::RuntimeFailed { epoch: epoch_a });
        assert_eq!(state.phase, RuntimePhase::Loading);

        // B's own completion still lands.
        let epoch_b = state.epoch;
        let state = reduce(state, SessionAction::RuntimeReady { epoch: epoch_b });
        assert_eq!(state.phase, RuntimePhase::Ready);
    }

    #[test]
    fn stale_acquisition_after_close_is_dropped() {
        let (state, epoch_a) = open_game(0);
        let state = reduce(state, SessionAction::Close);
        let state = reduce(state, SessionAction::RuntimeReady { epoch: epoch_a });
        assert_eq!(state.phase, RuntimePhase::Idle);
        assert!(state.game.is_none());
    }

    #[test]
    fn run_is_a_no_op_until_runtime_is_ready() {
        let (state, _) = open_game(0);
        let state = reduce(state, SessionAction::RunStarted);
        assert!(!state.run_in_flight);
        assert!(state.output.is_none());
    }

    #[test]
    fn run_is_a_no_op_after_load_failure() {
        let (state, epoch) = open_game(0);
        let state = reduce(state, SessionAction::RuntimeFailed { epoch });
        assert_eq!(state.phase, RuntimePhase::Failed);
        let state = reduce(state, SessionAction::RunStarted);
        assert!(!state.run_in_flight);
    }

    #[test]
    fn second_run_is_a_no_op_while_first_is_outstanding() {
        let (state, epoch) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        assert!(state.run_in_flight);
        let state = reduce(state, SessionAction::RunStarted);
        assert!(state.run_in_flight);

        // Exactly one completion lands; afterwards a second finish for the
        // same epoch is ignored because no run is outstanding.
        let state = reduce(
            state,
            SessionAction::RunFinished { epoch, result: Ok("done".to_string()) },
        );
        assert_eq!(state.output, Some(ExecutionOutcome::Success("done".to_string())));
        let state = reduce(
            state,
            SessionAction::RunFinished { epoch, result: Ok("again".to_string()) },
        );
        assert_eq!(state.output, Some(ExecutionOutcome::Success("done".to_string())));
    }

    #[test]
    fn successful_run_captures_output() {
        let (state, epoch) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        let state = reduce(
            state,
            SessionAction::RunFinished {
                epoch,
                result: Ok("Welcome to MiniCat!".to_string()),
            },
        );
        assert_eq!(
            state.output,
            Some(ExecutionOutcome::Success("Welcome to MiniCat!".to_string()))
        );
        assert!(state.can_run());
    }

    #[test]
    fn failed_run_is_captured_and_session_stays_interactive() {
        let (state, epoch) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        let state = reduce(
            state,
            SessionAction::RunFinished {
                epoch,
                result: Err("SyntaxError: invalid syntax".to_string()),
            },
        );
        match state.output {
            Some(ExecutionOutcome::Failure(ref msg)) => assert!(!msg.is_empty()),
            ref other => panic!("expected failure output, got {other:?}"),
        }
        assert_eq!(state.phase, RuntimePhase::Ready);
        assert!(state.can_run());
    }

    #[test]
    fn run_start_clears_previous_output() {
        let (state, epoch) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        let state = reduce(
            state,
            SessionAction::RunFinished { epoch, result: Ok("first".to_string()) },
        );
        let state = reduce(state, SessionAction::RunStarted);
        assert!(state.output.is_none());
    }

    #[test]
    fn stale_run_completion_is_dropped_after_reopen() {
        let (state, epoch_a) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        let state = reduce(state, SessionAction::Open(default_games().remove(2)));
        let state = reduce(
            state,
            SessionAction::RunFinished {
                epoch: epoch_a,
                result: Ok("late".to_string()),
            },
        );
        assert!(state.output.is_none());
        assert_eq!(state.phase, RuntimePhase::Loading);
    }

    #[test]
    fn close_resets_everything_regardless_of_in_flight_work() {
        let (state, epoch) = ready_session();
        let state = reduce(state, SessionAction::RunStarted);
        let state = reduce(state, SessionAction::SetFullscreen(true));
        let state = reduce(state, SessionAction::ToggleMute);
        let state = reduce(state, SessionAction::Close);
        assert_eq!(
            *state,
            SessionState { epoch: state.epoch, ..SessionState::default() }
        );
        assert!(state.epoch > epoch);
    }

    #[test]
    fn fullscreen_toggled_twice_returns_to_original() {
        let (state, _) = ready_session();
        let original = state.fullscreen;
        let state = reduce(state, SessionAction::SetFullscreen(!original));
        let state = reduce(state, SessionAction::SetFullscreen(original));
        assert_eq!(state.fullscreen, original);
    }

    #[test]
    fn mute_is_independent_of_loader_state() {
        let (state, _) = open_game(0);
        let state = reduce(state, SessionAction::ToggleMute);
        assert!(state.muted);
        assert_eq!(state.phase, RuntimePhase::Loading);
        let state = reduce(state, SessionAction::ToggleMute);
        assert!(!state.muted);
    }
}
