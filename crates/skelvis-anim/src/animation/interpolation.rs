//! Keyframe interpolation for animation channels

use super::types::{Keyframe, Lerp};

/// Find the index of the earlier keyframe in the segment bracketing `time`
///
/// Returns the last index whose timestamp is at or before `time`, clamped
/// to `[0, len - 2]` so that `[index]` and `[index + 1]` always form a
/// segment. Times before the first key use the first segment, times at or
/// after the last key hold the final segment. Returns `None` for fewer
/// than two keys.
pub fn find_segment_index<T>(keys: &[Keyframe<T>], time: f32) -> Option<usize> {
    if keys.len() < 2 {
        return None;
    }

    let at_or_before = keys.partition_point(|k| k.time <= time);
    Some(at_or_before.saturating_sub(1).min(keys.len() - 2))
}

/// Blend factor of `time` within the segment `[start, end]`
///
/// Clamped to `[0, 1]`; a zero-length segment yields 0.
pub fn segment_alpha(start: f32, end: f32, time: f32) -> f32 {
    let span = end - start;
    if span > 0.0 {
        ((time - start) / span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Interpolate a keyframe sequence at `time`
///
/// A single key is returned unchanged for any time. Returns `None` only for
/// an empty slice.
pub fn sample_keys<T: Lerp>(keys: &[Keyframe<T>], time: f32) -> Option<T> {
    match keys {
        [] => None,
        [only] => Some(only.value),
        _ => {
            let index = find_segment_index(keys, time)?;
            let (k0, k1) = (&keys[index], &keys[index + 1]);
            let alpha = segment_alpha(k0.time, k1.time, time);
            Some(k0.value.lerp(&k1.value, alpha))
        }
    }
}
