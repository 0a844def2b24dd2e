mod captions;
mod health;

pub use captions::generate_captions_handler;
pub use health::health_handler;
