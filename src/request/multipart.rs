/// Incremental `multipart/form-data` body writer.
///
/// Parts are appended in call order. Part names and file names are written
/// verbatim and must not contain quotes or line breaks.
#[derive(Debug)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartForm {
    /// Creates an empty form with a random boundary.
    pub fn new() -> Self {
        Self::with_boundary(&format!("pushover-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn with_boundary(boundary: &str) -> Self {
        Self {
            boundary: boundary.to_string(),
            body: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// `Content-Type` header value matching this form's boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn text(&mut self, name: &str, value: &str) {
        self.open_part();
        self.push_line(&format!("Content-Disposition: form-data; name=\"{name}\""));
        self.push_line("");
        self.body.extend_from_slice(value.as_bytes());
        self.push_line("");
    }

    pub fn file(&mut self, name: &str, filename: &str, data: &[u8]) {
        self.open_part();
        self.push_line(&format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\""
        ));
        self.push_line("Content-Type: application/octet-stream");
        self.push_line("");
        self.body.extend_from_slice(data);
        self.push_line("");
    }

    /// Writes the closing delimiter and returns the encoded body.
    pub fn finish(mut self) -> Vec<u8> {
        let closing = format!("--{}--", self.boundary);
        self.push_line(&closing);
        self.body
    }

    fn open_part(&mut self) {
        let delimiter = format!("--{}", self.boundary);
        self.push_line(&delimiter);
    }

    fn push_line(&mut self, line: &str) {
        self.body.extend_from_slice(line.as_bytes());
        self.body.extend_from_slice(b"\r\n");
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
