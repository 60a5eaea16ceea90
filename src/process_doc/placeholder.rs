//! Placeholder report written when the input is not already a PDF.
//!
//! The document is a valid PDF 1.4 file with a single blank Letter page. Its
//! bytes never change, so they are built once and shared.

use once_cell::sync::Lazy;

const HEADER: &str = "%PDF-1.4\n% placeholder analysis report\n";

const OBJECTS: [&str; 3] = [
    "<< /Type /Catalog /Pages 2 0 R >>",
    "<< /Type /Pages /Kids [3 0 R] /Count 1 >>",
    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>",
];

static PLACEHOLDER_PDF: Lazy<Vec<u8>> = Lazy::new(build);

/// Bytes of the placeholder document.
pub fn placeholder_pdf() -> &'static [u8] {
    &PLACEHOLDER_PDF
}

fn build() -> Vec<u8> {
    // Everything is ASCII, so string length equals byte offset.
    let mut doc = String::from(HEADER);
    let mut offsets = Vec::with_capacity(OBJECTS.len());

    for (i, body) in OBJECTS.iter().enumerate() {
        offsets.push(doc.len());
        doc.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_start = doc.len();
    doc.push_str(&format!("xref\n0 {}\n", OBJECTS.len() + 1));
    // Each entry is exactly 20 bytes, the trailing " \n" counting as the EOL.
    doc.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        doc.push_str(&format!("{:010} 00000 n \n", offset));
    }

    doc.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        OBJECTS.len() + 1,
        xref_start
    ));

    doc.into_bytes()
}
