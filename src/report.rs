//! Extraction of the delimited project report from assistant output.
//!
//! The system instruction asks the model to close a qualified conversation
//! with a summary wrapped in fixed marker lines. A reply only counts as
//! carrying a report when both markers appear exactly once, in order, with
//! a non-empty body between them; anything else is treated as ordinary
//! chat so a half-emitted block can never be mailed out.

use thiserror::Error;

pub const REPORT_START: &str = "--- RAPOR BAŞLANGICI ---";
pub const REPORT_END: &str = "--- RAPOR BİTİŞİ ---";

/// A validated report body, stored without the surrounding markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReport {
    body: String,
}

impl LeadReport {
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The report as it is mailed out: markers restored around the body.
    pub fn to_delimited_block(&self) -> String {
        format!("{REPORT_START}\n{}\n{REPORT_END}", self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportScanError {
    #[error("opening marker appears more than once")]
    DuplicateStart,

    #[error("closing marker appears more than once")]
    DuplicateEnd,

    #[error("closing marker is missing")]
    MissingEnd,

    #[error("closing marker precedes the opening marker")]
    OutOfOrder,

    #[error("report body is empty")]
    EmptyBody,
}

/// Scans an assistant reply for a report block.
///
/// Returns `Ok(None)` when the reply carries no opening marker at all, and
/// an error when markers are present but the block is malformed.
pub fn extract(text: &str) -> Result<Option<LeadReport>, ReportScanError> {
    let mut starts = text.match_indices(REPORT_START);
    let Some((start_idx, _)) = starts.next() else {
        return Ok(None);
    };
    if starts.next().is_some() {
        return Err(ReportScanError::DuplicateStart);
    }

    let mut ends = text.match_indices(REPORT_END);
    let Some((end_idx, _)) = ends.next() else {
        return Err(ReportScanError::MissingEnd);
    };
    if ends.next().is_some() {
        return Err(ReportScanError::DuplicateEnd);
    }
    if end_idx < start_idx {
        return Err(ReportScanError::OutOfOrder);
    }

    let body = text[start_idx + REPORT_START.len()..end_idx].trim();
    if body.is_empty() {
        return Err(ReportScanError::EmptyBody);
    }

    Ok(Some(LeadReport { body: body.to_string() }))
}

/// Whether a message visually contains a report block. Used for rendering
/// only; never a substitute for [`extract`].
pub fn mentions_report(text: &str) -> bool {
    text.contains(REPORT_START)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(body: &str) -> String {
        format!("Teşekkürler!\n\n{REPORT_START}\n{body}\n{REPORT_END}\n\nEn kısa sürede dönüş yapılacak.")
    }

    #[test]
    fn plain_chat_is_not_a_report() {
        assert_eq!(extract("Merhaba, size nasıl yardımcı olabilirim?"), Ok(None));
    }

    #[test]
    fn stray_closing_marker_alone_is_plain_chat() {
        let text = format!("not: {REPORT_END}");
        assert_eq!(extract(&text), Ok(None));
    }

    #[test]
    fn well_formed_block_is_extracted() {
        let body = "**Müşteri Adı:** Ayşe Yılmaz\n**Kategori:** Düğün";
        let report = extract(&wrapped(body)).unwrap().unwrap();
        assert_eq!(report.body(), body);
    }

    #[test]
    fn body_whitespace_is_trimmed_but_inner_lines_survive() {
        let text = format!("{REPORT_START}\n\n  line one\nline two  \n\n{REPORT_END}");
        let report = extract(&text).unwrap().unwrap();
        assert_eq!(report.body(), "line one\nline two");
    }

    #[test]
    fn missing_closing_marker_is_rejected() {
        let text = format!("{REPORT_START}\niçerik");
        assert_eq!(extract(&text), Err(ReportScanError::MissingEnd));
    }

    #[test]
    fn duplicated_opening_marker_is_rejected() {
        let text = format!("{REPORT_START}\nilk\n{REPORT_START}\nikinci\n{REPORT_END}");
        assert_eq!(extract(&text), Err(ReportScanError::DuplicateStart));
    }

    #[test]
    fn duplicated_closing_marker_is_rejected() {
        let text = format!("{REPORT_START}\niçerik\n{REPORT_END}\n{REPORT_END}");
        assert_eq!(extract(&text), Err(ReportScanError::DuplicateEnd));
    }

    #[test]
    fn markers_out_of_order_are_rejected() {
        let text = format!("{REPORT_END}\niçerik\n{REPORT_START}");
        assert_eq!(extract(&text), Err(ReportScanError::OutOfOrder));
    }

    #[test]
    fn empty_body_is_rejected() {
        let text = format!("{REPORT_START}\n   \n{REPORT_END}");
        assert_eq!(extract(&text), Err(ReportScanError::EmptyBody));
    }

    #[test]
    fn delimited_block_restores_the_markers() {
        let report = extract(&wrapped("özet")).unwrap().unwrap();
        let block = report.to_delimited_block();
        assert!(block.starts_with(REPORT_START));
        assert!(block.ends_with(REPORT_END));
        assert!(block.contains("özet"));
    }

    #[test]
    fn mentions_report_tracks_the_opening_marker() {
        assert!(mentions_report(&wrapped("özet")));
        assert!(!mentions_report("sıradan mesaj"));
    }
}
