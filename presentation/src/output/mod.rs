//! Output rendering for answers, hotel results and plans

pub mod console;
pub mod terminal;
