pub mod breakdown;
pub mod header;
pub mod history;
pub mod prayers;
pub mod statusbar;
pub mod summary;
