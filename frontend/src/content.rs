use log::info;
use serde::Deserialize;

use crate::rotator::{Rating, RotatorError, Testimonial};

const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");

/// Testimonials shipped with the build, in display order.
pub fn testimonials() -> Result<Vec<Testimonial>, RotatorError> {
    parse_testimonials(TESTIMONIALS_JSON)
}

// Ratings are checked after parsing so a bad one reports as `InvalidRating`
// rather than a stringified serde error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTestimonial {
    author: String,
    role: String,
    quote_text: String,
    rating: u8,
}

impl TryFrom<RawTestimonial> for Testimonial {
    type Error = RotatorError;

    fn try_from(raw: RawTestimonial) -> Result<Self, Self::Error> {
        Ok(Testimonial {
            author: raw.author,
            role: raw.role,
            quote_text: raw.quote_text,
            rating: Rating::try_from(raw.rating)?,
        })
    }
}

fn parse_testimonials(raw: &str) -> Result<Vec<Testimonial>, RotatorError> {
    let records: Vec<RawTestimonial> = serde_json::from_str(raw)?;
    let testimonials = records
        .into_iter()
        .map(Testimonial::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    if testimonials.is_empty() {
        return Err(RotatorError::EmptyTestimonials);
    }
    info!("Loaded {} testimonials", testimonials.len());
    Ok(testimonials)
}
