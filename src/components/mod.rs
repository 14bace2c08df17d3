pub mod footer;
pub mod header;
pub mod modals;
pub mod news_panel;
pub mod notifications;
pub mod ticker_input;

/// Braille spinner frame for the given tick count.
#[must_use]
pub fn spinner(frame_count: u64) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    FRAMES[(frame_count % FRAMES.len() as u64) as usize]
}
