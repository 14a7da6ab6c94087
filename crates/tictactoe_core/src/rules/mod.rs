//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the controller and both search strategies share one
//! definition of legality and terminal state.

pub mod draw;
pub mod moves;
pub mod status;
pub mod win;

pub use draw::is_draw;
pub use moves::empty_cells;
pub use status::{is_game_over, status};
pub use win::{LINES, is_winner};
