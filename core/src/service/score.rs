/// Maps a raw metric value to the discrete display bucket (0-4).
///
/// The contract domain is 0..=10; anything above clamps into the top
/// bucket instead of rejecting, so a malformed input value can never
/// crash a render.
pub fn score_level(value: u8) -> u8 {
    match value {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}
