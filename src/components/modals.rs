pub mod alert;
pub mod helpers;
