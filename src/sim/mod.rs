//! Chase simulation module
//!
//! All gameplay logic for the complex lives here. This module must stay pure:
//! - State changes only inside `tick`, `start` and `reset`
//! - Input is read from a snapshot taken at the top of the tick
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod input;
pub mod motion;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use clock::GameClock;
pub use collision::{CatchCheck, check_catch};
pub use input::{Action, InputState};
pub use motion::{Corridor, integrate_player};
pub use pursuit::{PursuitMode, pursue, pursuit_mode};
pub use state::{ChaseState, GameEvent, Position, SessionPhase};
pub use tick::tick;
