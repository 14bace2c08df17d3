pub mod effects;
pub mod news;
pub mod ticker;
pub mod ui;
