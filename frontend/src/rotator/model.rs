use serde::Deserialize;

use super::error::RotatorError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Star rating attached to a testimonial, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RotatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(RotatorError::InvalidRating(value))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub author: String,
    pub role: String,
    pub quote_text: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Direction::Next => "slide-from-right",
            Direction::Previous => "slide-from-left",
        }
    }
}

/// Steps `current` by `delta` and wraps into `0..len`. `len` must be at least 1.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}
