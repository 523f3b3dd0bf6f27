/// Precondition violations from the hosting page. None of these are runtime
/// conditions a visitor can trigger through the carousel itself.
#[derive(Debug, thiserror::Error)]
pub enum RotatorError {
    #[error("testimonial list is empty")]
    EmptyTestimonials,

    #[error("index {index} is out of range for {len} testimonials")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("rating {0} is outside 1..=5")]
    InvalidRating(u8),

    #[error("malformed testimonial content: {0}")]
    Content(#[from] serde_json::Error),
}
