mod error;
mod model;
mod scheduler;
mod state;

pub use error::RotatorError;
pub use model::{Rating, Testimonial, MAX_RATING};
pub use scheduler::{GlooScheduler, TimerEvent};
pub use state::Rotator;
