pub mod color;
pub mod config;
pub mod request;

pub use color::{ColorEntry, Notation, Rgb};
pub use config::{AppConfig, DEFAULT_MAX_COLORS};
pub use request::{
    BackgroundCondition, Direction, TranslatedColor, TranslationRequest, TranslationResult,
};
