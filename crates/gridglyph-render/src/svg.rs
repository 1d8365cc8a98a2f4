//! A minimal SVG document model and writer.

use std::fmt;
use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::transform::Transform2D;
use crate::types::{Point, Rect};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    /// A filled, optionally rounded rectangle.
    Rect { rect: Rect, radius: f32, fill: String },
    /// A single line of text with its baseline at `position`.
    Text {
        position: Point,
        content: String,
        family: String,
        size: f32,
        weight: String,
        fill: String,
    },
    /// Path data drawn through a transform.
    Path {
        data: String,
        fill: String,
        transform: Transform2D,
    },
}

impl SvgNode {
    /// The fill color of the node.
    pub fn fill(&self) -> &str {
        match self {
            Self::Rect { fill, .. } | Self::Text { fill, .. } | Self::Path { fill, .. } => fill,
        }
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) {
        match self {
            Self::Rect { rect, radius, fill } => {
                let mut start = BytesStart::new("rect");
                start.push_attribute(("x", num(rect.x()).as_str()));
                start.push_attribute(("y", num(rect.y()).as_str()));
                start.push_attribute(("width", num(rect.width()).as_str()));
                start.push_attribute(("height", num(rect.height()).as_str()));
                if *radius > 0.0 {
                    start.push_attribute(("rx", num(*radius).as_str()));
                }
                start.push_attribute(("fill", fill.as_str()));
                let _ = writer.write_event(Event::Empty(start));
            }
            Self::Text {
                position,
                content,
                family,
                size,
                weight,
                fill,
            } => {
                let mut start = BytesStart::new("text");
                start.push_attribute(("x", num(position.x).as_str()));
                start.push_attribute(("y", num(position.y).as_str()));
                start.push_attribute(("font-family", family.as_str()));
                start.push_attribute(("font-size", num(*size).as_str()));
                start.push_attribute(("font-weight", weight.as_str()));
                start.push_attribute(("fill", fill.as_str()));
                let _ = writer.write_event(Event::Start(start));
                let _ = writer.write_event(Event::Text(BytesText::new(content)));
                let _ = writer.write_event(Event::End(BytesEnd::new("text")));
            }
            Self::Path {
                data,
                fill,
                transform,
            } => {
                let mut start = BytesStart::new("path");
                start.push_attribute(("d", data.as_str()));
                start.push_attribute(("fill", fill.as_str()));
                if !transform.is_identity() {
                    start.push_attribute(("transform", transform.to_string().as_str()));
                }
                let _ = writer.write_event(Event::Empty(start));
            }
        }
    }
}

/// A sized SVG image made of [`SvgNode`]s drawn in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f32,
    height: f32,
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    /// Create an empty document.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Append a node on top of the existing ones.
    pub fn push(&mut self, node: SvgNode) {
        self.nodes.push(node);
    }

    /// The nodes, bottom first.
    pub fn nodes(&self) -> &[SvgNode] {
        &self.nodes
    }

    /// Serialize the document.
    pub fn to_svg_string(&self) -> String {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer);
        String::from_utf8(writer.into_inner()).unwrap_or_default()
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) {
        let width = num(self.width);
        let height = num(self.height);
        let viewbox = format!("0 0 {width} {height}");

        let mut start = BytesStart::new("svg");
        start.push_attribute(("xmlns", SVG_NAMESPACE));
        start.push_attribute(("width", width.as_str()));
        start.push_attribute(("height", height.as_str()));
        start.push_attribute(("viewBox", viewbox.as_str()));
        let _ = writer.write_event(Event::Start(start));

        for node in &self.nodes {
            node.write_to(writer);
        }

        let _ = writer.write_event(Event::End(BytesEnd::new("svg")));
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_string())
    }
}

fn num(value: f32) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let doc = SvgDocument::new(20.0, 15.3);
        assert_eq!(
            doc.to_svg_string(),
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="15.3" viewBox="0 0 20 15.3"></svg>"#
        );
    }

    #[test]
    fn nodes_in_order() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.push(SvgNode::Rect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            radius: 2.0,
            fill: "#000000".into(),
        });
        doc.push(SvgNode::Rect {
            rect: Rect::new(0.5, 0.5, 9.0, 9.0),
            radius: 0.0,
            fill: "#ffffff".into(),
        });

        let svg = doc.to_svg_string();
        let first = svg.find(r##"fill="#000000""##).unwrap();
        let second = svg.find(r##"fill="#ffffff""##).unwrap();
        assert!(first < second);
        assert!(svg.contains(r#"rx="2""#));
        assert_eq!(svg.matches("rx=").count(), 1);
    }

    #[test]
    fn text_is_escaped() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.push(SvgNode::Text {
            position: Point::new(1.0, 8.0),
            content: "a<b & c".into(),
            family: "Mono".into(),
            size: 12.0,
            weight: "700".into(),
            fill: "#000000".into(),
        });

        let svg = doc.to_svg_string();
        assert!(svg.contains(">a&lt;b &amp; c</text>"), "{svg}");
        assert!(svg.contains(r#"font-weight="700""#));
    }

    #[test]
    fn path_transform_attribute() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.push(SvgNode::Path {
            data: "M0 0L1 1".into(),
            fill: "red".into(),
            transform: Transform2D::scale(0.5),
        });
        doc.push(SvgNode::Path {
            data: "M1 1".into(),
            fill: "red".into(),
            transform: Transform2D::IDENTITY,
        });

        let svg = doc.to_svg_string();
        assert!(svg.contains(r#"transform="matrix(0.5 0 0 0.5 0 0)""#), "{svg}");
        assert_eq!(svg.matches("transform=").count(), 1);
    }
}
