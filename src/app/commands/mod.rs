pub mod generate;
pub mod preview;
pub mod tones;
