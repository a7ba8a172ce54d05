//! Response format negotiation from the `Accept` header.

/// Wire format of a conversion response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Picks the first JSON or XML media type listed in `accept`.
    ///
    /// Quality values are ignored; listing order decides. Anything else,
    /// including a missing header or `*/*`, yields JSON.
    pub fn from_accept(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return ResponseFormat::Json;
        };

        for media_type in accept.split(',') {
            let essence = media_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();

            match essence.as_str() {
                "application/json" => return ResponseFormat::Json,
                "application/xml" | "text/xml" => return ResponseFormat::Xml,
                other if other.ends_with("+json") => return ResponseFormat::Json,
                other if other.ends_with("+xml") => return ResponseFormat::Xml,
                _ => continue,
            }
        }

        ResponseFormat::Json
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
        }
    }
}
