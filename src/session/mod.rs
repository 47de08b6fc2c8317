//! Game session: state, timer, controller, and the task that drives it.

mod controller;
mod driver;
mod notice;
mod state;
mod timer;

pub use controller::{
    GameSessionController, RestartOutcome, SolveOutcome, SubmitOutcome, ToggleOutcome,
};
pub use driver::{Command, SessionHandle};
pub use notice::{Notice, Operation};
pub(crate) use state::GameSession;
pub use state::{Phase, SessionSnapshot};
pub use timer::{SessionTimer, format_elapsed};
