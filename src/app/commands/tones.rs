use crate::domain::Tone;

/// Tone options in menu order.
pub fn list() -> Vec<Tone> {
    Tone::ALL.to_vec()
}
