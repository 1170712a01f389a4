use crate::error::{Error, Result};
use reqwest::blocking::multipart::{Form, Part};
use std::fs;
use std::path::Path;

/// Build a multipart form for a file-upload endpoint: one file part under
/// `file_field` carrying the file's base name and raw bytes, then one text
/// part per auxiliary field.
///
/// The file is read fully into memory and the handle is closed before the
/// form is assembled; a missing or unreadable file fails here, before any
/// network I/O. The multipart boundary and content type are generated by
/// reqwest.
pub fn build_form(file_field: &str, path: &str, aux: &[(&'static str, String)]) -> Result<Form> {
    let path = Path::new(path);
    let data = fs::read(path).map_err(Error::Upload)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::RequestBuild(format!("invalid upload path: {}", path.display())))?;

    let mut form = Form::new().part(
        file_field.to_string(),
        Part::bytes(data).file_name(file_name),
    );

    for (name, value) in aux {
        form = form.text(*name, value.clone());
    }

    Ok(form)
}
