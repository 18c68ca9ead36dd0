pub mod date;
pub mod grid;
pub mod record;
