//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Nothing here is cached: the board
//! changes every ply, so the status is recomputed on demand.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::evaluate;
pub use win::{WIN_LINES, check_winner};
