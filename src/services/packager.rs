use crate::models::{FileSelection, SelectedFile};
use bytes::Bytes;
use mime::Mime;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Field name the processing endpoint expects for every file part.
pub const FIELD_NAME: &str = "images";

/// One entry of the multipart body: original filename, original bytes, and a
/// content type guessed from the filename extension.
#[derive(Debug, Clone)]
pub struct PayloadPart {
    pub filename: String,
    pub bytes: Bytes,
    pub content_type: Mime,
}

/// Multipart request body built from one [`FileSelection`].
///
/// Built fresh per upload action and never reused. The parts stay
/// inspectable here; [`UploadPayload::to_form`] produces the wire form.
#[derive(Debug, Clone, Default)]
pub struct UploadPayload {
    parts: Vec<PayloadPart>,
}

impl UploadPayload {
    /// Packages a selection: one part per file under the `"images"` key,
    /// selection order preserved. No validation of type, size, or count.
    pub fn from_selection(selection: FileSelection) -> Self {
        let parts = selection
            .into_files()
            .into_iter()
            .map(|SelectedFile { name, bytes }| {
                let content_type = mime_guess::from_path(&name).first_or_octet_stream();
                debug!(
                    "📦 Payload entry: {} ({} bytes, {})",
                    name,
                    bytes.len(),
                    content_type
                );
                PayloadPart {
                    filename: name,
                    bytes,
                    content_type,
                }
            })
            .collect();

        Self { parts }
    }

    pub fn parts(&self) -> &[PayloadPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Builds the wire form. A fresh `Form` per call, since reqwest consumes
    /// the form on send; an empty payload yields a form with zero parts.
    pub fn to_form(&self) -> Form {
        let mut form = Form::new();
        for part in &self.parts {
            form = form.part(FIELD_NAME, wire_part(part));
        }
        form
    }
}

fn wire_part(part: &PayloadPart) -> Part {
    let base = Part::bytes(part.bytes.to_vec()).file_name(part.filename.clone());
    match base.mime_str(part.content_type.as_ref()) {
        Ok(with_mime) => with_mime,
        // mime_guess only yields parseable types; keep the part rather than
        // fail the upload if that ever changes.
        Err(_) => Part::bytes(part.bytes.to_vec()).file_name(part.filename.clone()),
    }
}
