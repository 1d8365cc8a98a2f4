//! Icon documents: the viewbox and path data of a fetched SVG icon.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::DocumentError;
use crate::targets;
use crate::types::Rect;

/// One `<path>` of an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPath {
    /// The path's `d` attribute.
    pub data: String,
    /// The path's own fill, or the nearest fill inherited from a group.
    pub fill: Option<String>,
}

impl IconPath {
    /// Create a path without a fill.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill: None,
        }
    }
}

/// The parts of an SVG icon needed to redraw it in a badge.
///
/// Only `<path>` elements are kept, in document order. Other shapes are
/// skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDocument {
    viewbox: Rect,
    paths: Vec<IconPath>,
}

impl IconDocument {
    /// Build a document from already known parts.
    pub fn new(viewbox: Rect, paths: Vec<IconPath>) -> Self {
        Self { viewbox, paths }
    }

    /// The icon's native coordinate space.
    pub fn viewbox(&self) -> &Rect {
        &self.viewbox
    }

    /// The icon's paths, in document order.
    pub fn paths(&self) -> &[IconPath] {
        &self.paths
    }

    /// Parse SVG bytes.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::Malformed`] when the bytes are not well-formed XML
    ///   or the root element is not `<svg>`
    /// - [`DocumentError::MissingViewbox`] when the root has no `viewBox`
    /// - [`DocumentError::InvalidViewbox`] when the `viewBox` is not four
    ///   numbers with a positive width and height
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();

        let mut viewbox: Option<Rect> = None;
        let mut paths = Vec::new();
        // Inherited fill for every open element.
        let mut fills: Vec<Option<String>> = Vec::new();
        let mut seen_root = false;

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => break,
                Ok(Event::Start(start)) => {
                    let fill = open_element(&start, &mut seen_root, &mut viewbox, &fills, &mut paths)?;
                    fills.push(fill);
                }
                Ok(Event::Empty(empty)) => {
                    open_element(&empty, &mut seen_root, &mut viewbox, &fills, &mut paths)?;
                }
                Ok(Event::End(_)) => {
                    fills.pop();
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(DocumentError::Malformed(format!(
                        "{e} at position {}",
                        reader.error_position()
                    )));
                }
            }
        }

        if !seen_root {
            return Err(DocumentError::Malformed("no root element".to_string()));
        }
        if !fills.is_empty() {
            return Err(DocumentError::Malformed("unclosed element".to_string()));
        }

        let viewbox = viewbox.ok_or(DocumentError::MissingViewbox)?;
        tracing::debug!(target: targets::DOCUMENT, paths = paths.len(), ?viewbox, "parsed icon");
        Ok(Self { viewbox, paths })
    }
}

/// Handle an opening tag and return the fill its children inherit.
fn open_element(
    element: &BytesStart<'_>,
    seen_root: &mut bool,
    viewbox: &mut Option<Rect>,
    fills: &[Option<String>],
    paths: &mut Vec<IconPath>,
) -> Result<Option<String>, DocumentError> {
    let name = element.local_name();
    let name = name.as_ref();

    if !*seen_root {
        if name != b"svg" {
            return Err(DocumentError::Malformed(format!(
                "root element is <{}>, not <svg>",
                String::from_utf8_lossy(name)
            )));
        }
        *seen_root = true;
        if let Some(value) = attribute(element, b"viewBox") {
            *viewbox = Some(parse_viewbox(&value)?);
        }
    } else if fills.is_empty() {
        return Err(DocumentError::Malformed("more than one root element".to_string()));
    }

    let inherited = fills.last().cloned().flatten();
    let fill = attribute(element, b"fill").or(inherited);

    if name == b"path" {
        match attribute(element, b"d") {
            Some(data) => paths.push(IconPath {
                data,
                fill: fill.clone(),
            }),
            None => tracing::debug!(target: targets::DOCUMENT, "skipping path without data"),
        }
    }

    Ok(fill)
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

fn parse_viewbox(value: &str) -> Result<Rect, DocumentError> {
    let numbers: Vec<f32> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| DocumentError::InvalidViewbox(value.to_string()))?;

    match numbers[..] {
        [x, y, width, height] if width > 0.0 && height > 0.0 => {
            Ok(Rect::new(x, y, width, height))
        }
        _ => Err(DocumentError::InvalidViewbox(value.to_string())),
    }
}
