use std::sync::Arc;

use crate::error::TranslateError;
use crate::models::{
    ColorEntry, Rgb, TranslatedColor, TranslationRequest, TranslationResult, DEFAULT_MAX_COLORS,
};
use crate::services::output_assembler::TranslationOutput;
use crate::services::Translator;

/// Pipeline that orchestrates parse → validate → translate → assemble
///
/// Holds no per-request state; one instance serves every request.
pub struct TranslationPipeline {
    translator: Arc<dyn Translator>,
    max_colors: usize,
}

impl TranslationPipeline {
    pub fn new(translator: Arc<dyn Translator>, max_colors: usize) -> Self {
        Self {
            translator,
            max_colors,
        }
    }

    /// Pipeline with the default batch limit.
    pub fn with_translator(translator: Arc<dyn Translator>) -> Self {
        Self::new(translator, DEFAULT_MAX_COLORS)
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// Parse the raw input into entries, one per non-blank line.
    ///
    /// Fails on the first malformed line, or as soon as more than
    /// `max_colors` non-blank lines have been seen.
    pub fn parse_batch(&self, colors: &str) -> Result<Vec<ColorEntry>, TranslateError> {
        let mut entries = Vec::new();

        for line in colors.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if entries.len() >= self.max_colors {
                return Err(TranslateError::BatchTooLarge {
                    limit: self.max_colors,
                });
            }
            entries.push(ColorEntry::parse(line)?);
        }

        if entries.is_empty() {
            return Err(TranslateError::EmptyBatch);
        }

        Ok(entries)
    }

    /// Parse the request's colors and translate them in a single batch.
    pub fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let entries = self.parse_batch(&request.colors)?;
        let (source, destination) = request.direction.conditions();

        tracing::debug!(
            count = entries.len(),
            direction = %request.direction,
            j_factor = request.j_factor,
            m_factor = request.m_factor,
            "Translating color batch"
        );

        let inputs: Vec<Rgb> = entries.iter().map(|entry| entry.rgb).collect();
        let outputs = self.translator.translate(
            &inputs,
            source,
            destination,
            request.j_factor,
            request.m_factor,
        );

        if outputs.len() != entries.len() {
            return Err(TranslateError::TransformMismatch {
                expected: entries.len(),
                actual: outputs.len(),
            });
        }

        let colors = entries
            .into_iter()
            .zip(outputs)
            .map(|(source, destination)| TranslatedColor {
                source,
                destination,
            })
            .collect();

        Ok(TranslationResult {
            direction: request.direction,
            colors,
        })
    }

    /// Translate and build the display, dump and CSV views.
    pub fn process(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationOutput, TranslateError> {
        let result = self.translate(request)?;
        let output = TranslationOutput::assemble(&result);

        tracing::info!(
            count = result.colors.len(),
            direction = %result.direction,
            "Translated color batch"
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BackgroundCondition, Direction, Notation};
    use crate::services::IdentityTranslator;
    use std::sync::Mutex;

    fn identity_pipeline() -> TranslationPipeline {
        TranslationPipeline::with_translator(Arc::new(IdentityTranslator))
    }

    fn request(direction: Direction, colors: &str) -> TranslationRequest {
        TranslationRequest {
            direction,
            j_factor: 1.0,
            m_factor: 1.0,
            colors: colors.to_string(),
        }
    }

    fn lines(n: usize) -> String {
        (0..n)
            .map(|i| format!("#{:06x}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Records every call so tests can inspect what the pipeline sent.
    #[derive(Default)]
    struct RecordingTranslator {
        calls: Mutex<Vec<(usize, BackgroundCondition, BackgroundCondition, f64, f64)>>,
    }

    impl Translator for RecordingTranslator {
        fn translate(
            &self,
            colors: &[Rgb],
            source: BackgroundCondition,
            destination: BackgroundCondition,
            j_factor: f64,
            m_factor: f64,
        ) -> Vec<Rgb> {
            self.calls
                .lock()
                .unwrap()
                .push((colors.len(), source, destination, j_factor, m_factor));
            colors.to_vec()
        }
    }

    struct DroppingTranslator;

    impl Translator for DroppingTranslator {
        fn translate(
            &self,
            colors: &[Rgb],
            _: BackgroundCondition,
            _: BackgroundCondition,
            _: f64,
            _: f64,
        ) -> Vec<Rgb> {
            colors[1..].to_vec()
        }
    }

    #[test]
    fn test_end_to_end_identity() {
        let output = identity_pipeline()
            .process(&request(Direction::ToDark, "#000000\nrgb(255,255,255)"))
            .unwrap();

        let pairs: Vec<(&str, &str)> = output
            .pairs
            .iter()
            .map(|p| (p.source.as_str(), p.destination.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("#000000", "#000000"),
                ("rgb(255, 255, 255)", "rgb(255, 255, 255)")
            ]
        );
        assert_eq!(
            output.csv,
            "r_src,g_src,b_src,r_dst,g_dst,b_dst\n0,0,0,0,0,0\n255,255,255,255,255,255\n"
        );
        assert_eq!(output.dump, "#000000\nrgb(255, 255, 255)\n");
        assert_eq!((output.left_bg, output.right_bg), ("#fff", "#000"));
    }

    #[test]
    fn test_exactly_limit_succeeds() {
        let entries = identity_pipeline().parse_batch(&lines(256)).unwrap();
        assert_eq!(entries.len(), 256);
    }

    #[test]
    fn test_one_over_limit_fails() {
        let err = identity_pipeline().parse_batch(&lines(257)).unwrap_err();
        assert_eq!(err, TranslateError::BatchTooLarge { limit: 256 });
    }

    #[test]
    fn test_over_limit_reported_before_later_parse_errors() {
        let blob = format!("{}\nnot a color", lines(256));
        let err = identity_pipeline().parse_batch(&blob).unwrap_err();
        assert_eq!(err, TranslateError::BatchTooLarge { limit: 256 });
    }

    #[test]
    fn test_configured_limit() {
        let pipeline = TranslationPipeline::new(Arc::new(IdentityTranslator), 2);
        assert_eq!(pipeline.max_colors(), 2);
        assert!(pipeline.parse_batch("#000\n#111").is_ok());
        assert_eq!(
            pipeline.parse_batch("#000\n#111\n#222").unwrap_err(),
            TranslateError::BatchTooLarge { limit: 2 }
        );
    }

    #[test]
    fn test_blank_lines_do_not_count() {
        let mut blob = String::from("\n   \n\t\n");
        for i in 0..256 {
            blob.push_str(&format!("#{:06x}\n\n  \r\n", i));
        }
        let entries = identity_pipeline().parse_batch(&blob).unwrap();
        assert_eq!(entries.len(), 256);
        assert_eq!(entries[0].raw_text, "#000000");
        assert_eq!(entries[255].raw_text, "#0000ff");
    }

    #[test]
    fn test_only_blank_lines_is_empty_batch() {
        for blob in ["", "\n", "  \n\t\n \r\n"] {
            assert_eq!(
                identity_pipeline().parse_batch(blob).unwrap_err(),
                TranslateError::EmptyBatch,
                "{blob:?}"
            );
        }
    }

    #[test]
    fn test_parse_error_aborts_whole_batch() {
        let err = identity_pipeline()
            .process(&request(Direction::ToLight, "#000\n#12\n#fff"))
            .unwrap_err();
        assert_eq!(err, TranslateError::Parse("#12".to_string()));
    }

    #[test]
    fn test_crlf_input() {
        let entries = identity_pipeline()
            .parse_batch("#abc\r\n10, 20, 30\r\n")
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].notation, Notation::Hex);
        assert_eq!(entries[1].notation, Notation::Decimal);
        assert_eq!(entries[1].raw_text, "10, 20, 30");
    }

    #[test]
    fn test_translator_called_once_with_whole_batch() {
        let translator = Arc::new(RecordingTranslator::default());
        let pipeline = TranslationPipeline::with_translator(translator.clone());

        let mut req = request(Direction::ToLight, "#000\n\n#111\n#222");
        req.j_factor = 0.7;
        req.m_factor = 1.3;
        pipeline.translate(&req).unwrap();

        let calls = translator.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![(
                3,
                BackgroundCondition::Dark,
                BackgroundCondition::Light,
                0.7,
                1.3
            )]
        );
    }

    #[test]
    fn test_single_color_batch() {
        let translator = Arc::new(RecordingTranslator::default());
        let pipeline = TranslationPipeline::with_translator(translator.clone());

        let result = pipeline.translate(&request(Direction::ToDark, "#123")).unwrap();
        assert_eq!(result.colors.len(), 1);
        assert_eq!(translator.calls.lock().unwrap()[0].0, 1);
    }

    #[test]
    fn test_translator_length_mismatch() {
        let pipeline = TranslationPipeline::with_translator(Arc::new(DroppingTranslator));
        let err = pipeline
            .translate(&request(Direction::ToDark, "#000\n#fff"))
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::TransformMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_order_and_notation_preserved() {
        let result = identity_pipeline()
            .translate(&request(Direction::ToDark, "#fff\n0,0,0\n\n#00f\nrgb(1,2,3)"))
            .unwrap();

        let notations: Vec<Notation> = result.colors.iter().map(|c| c.source.notation).collect();
        assert_eq!(
            notations,
            [Notation::Hex, Notation::Decimal, Notation::Hex, Notation::Decimal]
        );
        let raw: Vec<&str> = result
            .colors
            .iter()
            .map(|c| c.source.raw_text.as_str())
            .collect();
        assert_eq!(raw, ["#fff", "0,0,0", "#00f", "rgb(1,2,3)"]);
    }
}
