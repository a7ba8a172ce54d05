//! Tagged-markup (XML) encoding of a conversion response.
//!
//! The converted map has no fixed schema: its keys are currency codes only
//! known at runtime. Each entry is written as its own element, named after
//! the code, inside a `<converted>` wrapper:
//!
//! ```text
//! <ConverterResponse>
//!   <amount>10</amount>
//!   <currency>PLN</currency>
//!   <converted><USD>2.53</USD><EUR>2.31</EUR></converted>
//! </ConverterResponse>
//! ```
//!
//! Child order follows map iteration order and is not stable. A code that
//! is not a valid XML element name fails the whole encoding with
//! [`EncodeError::InvalidName`].

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::domain::{ConversionResponse, ConvertedRates};

/// Root element name of an encoded response.
pub const ROOT_ELEMENT: &str = "ConverterResponse";

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("XML write error: {0}")]
    Xml(String),

    #[error("Encoded document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Currency code '{0}' is not a valid XML element name")]
    InvalidName(String),
}

fn is_name_start_char(c: char) -> bool {
    matches!(
        c,
        'A'..='Z'
            | '_'
            | 'a'..='z'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(
            c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// XML 1.0 `Name` production without `:`, which would read as a namespace prefix.
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => is_name_start_char(first) && chars.all(is_name_char),
        None => false,
    }
}

fn write_event<'a, W: Write>(
    writer: &mut Writer<W>,
    event: impl Into<Event<'a>>,
) -> Result<(), EncodeError> {
    writer
        .write_event(event)
        .map_err(|e| EncodeError::Xml(e.to_string()))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), EncodeError> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

impl ConvertedRates {
    /// Writes the map as `<element><CODE>value</CODE>...</element>`.
    pub fn write_xml<W: Write>(
        &self,
        writer: &mut Writer<W>,
        element: &str,
    ) -> Result<(), EncodeError> {
        write_event(writer, Event::Start(BytesStart::new(element)))?;
        for (code, value) in self {
            if !is_element_name(code) {
                return Err(EncodeError::InvalidName(code.clone()));
            }
            write_text_element(writer, code, &value.to_string())?;
        }
        write_event(writer, Event::End(BytesEnd::new(element)))
    }
}

impl ConversionResponse {
    /// Writes the full response document under [`ROOT_ELEMENT`].
    pub fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), EncodeError> {
        write_event(writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        write_text_element(writer, "amount", &self.amount().to_string())?;
        write_text_element(writer, "currency", self.currency())?;
        self.converted().write_xml(writer, "converted")?;
        write_event(writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))
    }
}

/// Encodes a response as a standalone XML document.
pub fn to_xml(response: &ConversionResponse) -> Result<String, EncodeError> {
    let mut writer = Writer::new(Vec::new());
    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    response.write_xml(&mut writer)?;

    Ok(String::from_utf8(writer.into_inner())?)
}
