pub mod color_formatter;
pub mod color_parser;
pub mod output_assembler;
pub mod translation_pipeline;
pub mod translator;

pub use color_formatter::{format_color, to_decimal, to_hex, to_int_channels};
pub use color_parser::parse_color;
pub use output_assembler::{DisplayPair, TranslationOutput, CSV_HEADER};
pub use translation_pipeline::TranslationPipeline;
pub use translator::{CamTranslator, IdentityTranslator, Translator};
