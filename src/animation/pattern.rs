//! printf-style frame file name patterns.
//!
//! A pattern holds exactly one integer conversion that is replaced with the
//! 1-based frame number: `walk_%d.png`, `walk_%03d.png`, `walk_%-4i.bmp`.
//! `%%` is a literal percent sign. Rendered names are cut at
//! [`MAX_FILENAME_LEN`] bytes.

use super::error::AnimationError;

/// Longest file name a pattern can produce, in bytes.
pub const MAX_FILENAME_LEN: usize = 1023;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePattern {
    prefix: String,
    suffix: String,
    width: usize,
    zero_pad: bool,
    left_align: bool,
}

impl FilenamePattern {
    pub fn parse(pattern: &str) -> Result<Self, AnimationError> {
        let invalid = |reason| AnimationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholder: Option<(usize, bool, bool)> = None;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            let out = if placeholder.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                out.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                out.push('%');
                continue;
            }

            let mut zero_pad = false;
            let mut left_align = false;
            while let Some(&flag) = chars.peek() {
                match flag {
                    '0' => zero_pad = true,
                    '-' => left_align = true,
                    _ => break,
                }
                chars.next();
            }
            let mut width = 0usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .filter(|w| *w <= MAX_FILENAME_LEN)
                    .ok_or_else(|| invalid("field width too large"))?;
                chars.next();
            }
            match chars.next() {
                Some('d' | 'i' | 'u') => {}
                Some(_) => return Err(invalid("only %d, %i and %u conversions are supported")),
                None => return Err(invalid("dangling '%' at end of pattern")),
            }
            if placeholder.is_some() {
                return Err(invalid("more than one frame number placeholder"));
            }
            placeholder = Some((width, zero_pad, left_align));
        }

        let (width, zero_pad, left_align) =
            placeholder.ok_or_else(|| invalid("missing frame number placeholder"))?;

        Ok(Self {
            prefix,
            suffix,
            width,
            zero_pad,
            left_align,
        })
    }

    /// File name for frame `number` (1-based).
    pub fn render(&self, number: u32) -> String {
        let width = self.width;
        let digits = if self.left_align {
            format!("{number:<width$}")
        } else if self.zero_pad {
            format!("{number:0width$}")
        } else {
            format!("{number:>width$}")
        };

        let mut name = String::with_capacity(self.prefix.len() + digits.len() + self.suffix.len());
        name.push_str(&self.prefix);
        name.push_str(&digits);
        name.push_str(&self.suffix);
        truncate_to_boundary(&mut name, MAX_FILENAME_LEN);
        name
    }

    /// File names for frames `1..=num_frames`, in order.
    pub fn expand(&self, num_frames: u32) -> Result<Vec<String>, AnimationError> {
        let mut names = Vec::new();
        names
            .try_reserve_exact(num_frames as usize)
            .map_err(|_| AnimationError::AllocationFailure(num_frames as usize))?;
        names.extend((1..=num_frames).map(|number| self.render(number)));
        Ok(names)
    }
}

fn truncate_to_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
