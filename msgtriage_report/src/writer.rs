use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use msgtriage_core::{AnnotatedRow, Result};

/// Write the header and every row, all fields quoted.
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(rows: &[AnnotatedRow], writer: W) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(AnnotatedRow::HEADER)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Render the report into memory.
pub fn render_csv(rows: &[AnnotatedRow]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(buf)
}

/// Render fully before touching `path`, so a failed render leaves no file behind.
pub fn write_report(path: &Path, rows: &[AnnotatedRow]) -> Result<()> {
    let bytes = render_csv(rows)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgtriage_core::Occurrence;

    fn row(author: &str, excerpt: &str) -> AnnotatedRow {
        AnnotatedRow {
            date: "2024-01-02".to_string(),
            author: author.to_string(),
            action: "Add".to_string(),
            object: "N/A".to_string(),
            case: "General Request".to_string(),
            thread_context: "No Thread".to_string(),
            status: Occurrence::InThread,
            excerpt: excerpt.to_string(),
        }
    }

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn rendered(rows: &[AnnotatedRow]) -> String {
        String::from_utf8(render_csv(rows).expect("render")).expect("utf-8")
    }

    #[test]
    fn test_header_only_for_no_rows() {
        assert_eq!(
            rendered(&[]),
            "\"Date\",\"Author\",\"Action\",\"Object\",\"Case\",\"Following request (Thread Context)\",\"Occurrence (Status)\",\"Original Message\"\n"
        );
    }

    #[test]
    fn test_every_field_quoted() {
        let out = rendered(&[row("alice", "hi...")]);
        let line = out.lines().nth(1).unwrap_or_default();
        assert_eq!(
            line,
            "\"2024-01-02\",\"alice\",\"Add\",\"N/A\",\"General Request\",\"No Thread\",\"In Thread\",\"hi...\""
        );
    }

    #[test]
    fn test_embedded_quotes_are_escaped() {
        let out = rendered(&[row("bob", "say \"hi\", ok...")]);
        assert!(out.contains("\"say \"\"hi\"\", ok...\""));
    }

    #[test]
    fn test_rows_keep_order() {
        let out = rendered(&[row("first", "a"), row("second", "b"), row("third", "c")]);
        let authors: Vec<_> = out
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap_or_default().to_string())
            .collect();
        assert_eq!(authors, vec!["\"first\"", "\"second\"", "\"third\""]);
    }
}
