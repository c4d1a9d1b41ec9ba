use std::time::Duration;

use rubric_grader::application::ports::{FileLoader, FileLoaderError};
use rubric_grader::domain::{ContentType, Document};
use rubric_grader::infrastructure::text_processing::PdfAdapter;

/// Writes a minimal PDF with one Helvetica text line per page. An empty
/// string yields a page with an empty content stream.
fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let kids = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + i * 2))
        .collect::<Vec<_>>()
        .join(" ");
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        let contents_id = 5 + i * 2;
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {contents_id} 0 R >>"
        ));
        let stream = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
        };
        objects.push(format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }
    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_are_joined_in_order() {
    let adapter = PdfAdapter::new();
    let data = pdf_with_pages(&["Alpha first page", "Bravo second page"]);
    let document = Document::new("two_pages.pdf".to_string(), ContentType::Pdf, data.clone());

    let result = adapter.extract_text(&data, &document).await;

    assert_eq!(result.unwrap(), "Alpha first page\n\nBravo second page");
}

#[tokio::test]
async fn given_pdf_with_only_blank_page_when_extracting_then_returns_no_text_found() {
    let adapter = PdfAdapter::new();
    let data = pdf_with_pages(&[""]);
    let document = Document::new("blank.pdf".to_string(), ContentType::Pdf, data.clone());

    let result = adapter.extract_text(&data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::NoTextFound(name)) if name == "blank.pdf"
    ));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_fails() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all".to_vec();
    let document = Document::new("corrupt.pdf".to_string(), ContentType::Pdf, garbage.clone());

    let result = adapter.extract_text(&garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_content_type_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new().with_timeout(Duration::from_secs(5));
    let data = b"plain words".to_vec();
    let document = Document::new("notes.txt".to_string(), ContentType::Text, data.clone());

    let result = adapter.extract_text(&data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(mime)) if mime == "text/plain"
    ));
}
