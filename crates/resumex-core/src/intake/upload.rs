//! Upload acceptance checks and the decode-then-extract pipeline.

use tracing::{debug, warn};

use super::{DocumentDecoder, DocumentKind, Result, SourceDescriptor};
use crate::error::IntakeError;
use crate::extract::{ExtractionResult, ResumeParser};
use crate::models::config::IntakeConfig;

/// Check an upload's type and size before decoding.
pub fn check_source(source: &SourceDescriptor, config: &IntakeConfig) -> Result<DocumentKind> {
    let accepted = config
        .accepted_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(source.mime_type.trim()));

    let kind = DocumentKind::from_mime(&source.mime_type)
        .filter(|_| accepted)
        .ok_or_else(|| IntakeError::UnsupportedType(source.mime_type.clone()))?;

    if source.size_bytes > config.max_file_size_bytes {
        return Err(IntakeError::TooLarge {
            size: source.size_bytes,
            limit: config.max_file_size_bytes,
        });
    }

    Ok(kind)
}

/// Accept, decode and extract a résumé upload.
///
/// A document that decodes to blank text yields the all-absent result so the
/// collection flow can ask for every field.
pub fn parse_resume<D, P>(
    decoder: &D,
    parser: &P,
    source: &SourceDescriptor,
    data: &[u8],
    config: &IntakeConfig,
) -> Result<ExtractionResult>
where
    D: DocumentDecoder + ?Sized,
    P: ResumeParser + ?Sized,
{
    let kind = check_source(source, config)?;

    if data.is_empty() {
        return Err(IntakeError::Empty);
    }

    debug!("Decoding {:?} upload of {} bytes", kind, data.len());
    let text = decoder.decode(kind, data)?;

    if text.trim().is_empty() {
        warn!("Decoded document contains no text");
    }

    Ok(parser.parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ContactExtractor;
    use crate::models::extracted::Field;

    struct Utf8Decoder;

    impl DocumentDecoder for Utf8Decoder {
        fn decode(&self, _kind: DocumentKind, data: &[u8]) -> Result<String> {
            String::from_utf8(data.to_vec()).map_err(|e| IntakeError::Decode(e.to_string()))
        }
    }

    fn pdf(size: u64) -> SourceDescriptor {
        SourceDescriptor::new("application/pdf", size).with_file_name("cv.pdf")
    }

    #[test]
    fn test_check_source_accepts_limit() {
        let config = IntakeConfig::default();
        assert_eq!(
            check_source(&pdf(config.max_file_size_bytes), &config).unwrap(),
            DocumentKind::Pdf
        );
    }

    #[test]
    fn test_check_source_rejects_oversize() {
        let config = IntakeConfig::default();
        let err = check_source(&pdf(config.max_file_size_bytes + 1), &config).unwrap_err();
        assert!(matches!(err, IntakeError::TooLarge { .. }));
    }

    #[test]
    fn test_check_source_rejects_type() {
        let config = IntakeConfig::default();
        let err = check_source(&SourceDescriptor::new("image/png", 10), &config).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedType(_)));
    }

    #[test]
    fn test_check_source_respects_accepted_types() {
        let config = IntakeConfig {
            accepted_types: vec!["application/pdf".to_string()],
            ..Default::default()
        };
        let docx = SourceDescriptor::new(DocumentKind::Docx.mime_type(), 10);
        assert!(check_source(&docx, &config).is_err());
    }

    #[test]
    fn test_parse_resume() {
        let data = b"Jane Smith\njane@smith.io\n(555) 234-5678";
        let result = parse_resume(
            &Utf8Decoder,
            &ContactExtractor::new(),
            &pdf(data.len() as u64),
            data,
            &IntakeConfig::default(),
        )
        .unwrap();

        assert_eq!(result.info.name.as_deref(), Some("Jane Smith"));
        assert_eq!(result.info.email.as_deref(), Some("jane@smith.io"));
        assert_eq!(result.info.phone.as_deref(), Some("(555) 234-5678"));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_parse_resume_blank_text() {
        let data = b"   \n ";
        let result = parse_resume(
            &Utf8Decoder,
            &ContactExtractor::new(),
            &pdf(data.len() as u64),
            data,
            &IntakeConfig::default(),
        )
        .unwrap();

        assert_eq!(result.info.text, "");
        assert_eq!(result.missing, Field::ALL.to_vec());
    }

    #[test]
    fn test_parse_resume_decode_failure() {
        let data = [0xff, 0xfe, 0x00];
        let err = parse_resume(
            &Utf8Decoder,
            &ContactExtractor::new(),
            &pdf(3),
            &data,
            &IntakeConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IntakeError::Decode(_)));
    }
}
