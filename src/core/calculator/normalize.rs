//! Canonicalization of user- and wire-entered clock times.

/// Parse up to three `:`-separated segments as (hour, minute, second).
///
/// Missing or empty segments count as 0; anything after the third segment
/// is ignored. A non-empty segment that is not a plain integer, or a
/// value outside its range, fails the whole parse.
pub(crate) fn time_parts(raw: &str) -> Option<(u32, u32, u32)> {
    let mut it = raw.trim().split(':');

    let h = segment(it.next())?;
    let m = segment(it.next())?;
    let s = segment(it.next())?;

    if h > 23 || m > 59 || s > 59 {
        return None;
    }
    Some((h, m, s))
}

fn segment(part: Option<&str>) -> Option<u32> {
    match part {
        None => Some(0),
        Some(p) => {
            let p = p.trim();
            if p.is_empty() {
                Some(0)
            } else {
                p.parse().ok()
            }
        }
    }
}

/// Normalize a free-text time into `HH:MM:SS`.
///
/// Accepts `HH`, `HH:MM`, `HH:MM:SS`. Empty or absent input yields None
/// (not an error); so does any out-of-range or non-numeric segment.
/// Idempotent over its own output.
pub fn normalize_time(input: Option<&str>) -> Option<String> {
    let raw = input?.trim();
    if raw.is_empty() {
        return None;
    }

    let (h, m, s) = time_parts(raw)?;
    Some(format!("{:02}:{:02}:{:02}", h, m, s))
}
