//! SVG output
//!
//! Serializes a laid-out [`Scene`]. Zoom is applied once, as a transform on
//! the outer group, so the scene itself stays in unscaled units.

use std::fmt::Write;

use super::layout::{Avatar, NodeBox, Scene};
use super::style::{Theme, AVATAR_RADIUS};
use super::zoom::Zoom;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const NAME_FONT_SIZE: f32 = 13.0;
const CAPTION_FONT_SIZE: f32 = 10.0;
const CORNER_RADIUS: f32 = 8.0;

/// Render a scene as a standalone SVG document
pub fn to_svg(scene: &Scene, theme: &Theme, zoom: Zoom) -> String {
    let scale = zoom.scale();
    let width = scene.width * scale;
    let height = scene.height * scale;
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    );
    let _ = write!(svg, "<g transform=\"scale({scale})\">");

    svg.push_str("<g class=\"connectors\">");
    for c in &scene.connectors {
        let _ = write!(
            svg,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"2\"/>",
            c.x1, c.y1, c.x2, c.y2, theme.connector
        );
    }
    svg.push_str("</g>");

    svg.push_str("<g class=\"nodes\">");
    for (index, node) in scene.nodes.iter().enumerate() {
        node_svg(&mut svg, index, node, theme);
    }
    svg.push_str("</g>");

    svg.push_str("</g></svg>");
    svg
}

fn node_svg(svg: &mut String, index: usize, node: &NodeBox, theme: &Theme) {
    let _ = write!(
        svg,
        "<g data-id=\"{}\" data-depth=\"{}\">",
        escape_xml(&node.key.to_string()),
        node.depth
    );
    let _ = write!(
        svg,
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{CORNER_RADIUS}\" ry=\"{CORNER_RADIUS}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        node.x, node.y, node.width, node.height, node.fill, theme.border
    );

    let cx = node.x + 8.0 + AVATAR_RADIUS;
    let cy = node.y + node.height / 2.0;
    match &node.avatar {
        Avatar::Image(href) => {
            let clip = format!("avatar-{}", index);
            let _ = write!(
                svg,
                "<clipPath id=\"{clip}\"><circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{AVATAR_RADIUS}\"/></clipPath>"
            );
            let _ = write!(
                svg,
                "<image href=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" clip-path=\"url(#{clip})\" preserveAspectRatio=\"xMidYMid slice\"/>",
                escape_xml(href),
                cx - AVATAR_RADIUS,
                cy - AVATAR_RADIUS,
                AVATAR_RADIUS * 2.0,
                AVATAR_RADIUS * 2.0
            );
        }
        Avatar::Monogram(initials) => {
            let _ = write!(
                svg,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{AVATAR_RADIUS}\" fill=\"{}\" fill-opacity=\"0.25\"/>",
                node.text
            );
            let _ = write!(
                svg,
                "<text x=\"{cx:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{FONT_FAMILY}\" font-size=\"{CAPTION_FONT_SIZE}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
                cy + CAPTION_FONT_SIZE / 3.0,
                node.text,
                escape_xml(initials)
            );
        }
    }

    let text_x = cx + AVATAR_RADIUS + 8.0;
    let _ = write!(
        svg,
        "<text x=\"{text_x:.2}\" y=\"{:.2}\" font-family=\"{FONT_FAMILY}\" font-size=\"{NAME_FONT_SIZE}\" font-weight=\"600\" fill=\"{}\">{}</text>",
        cy - 2.0,
        node.text,
        escape_xml(&node.name)
    );
    let _ = write!(
        svg,
        "<text x=\"{text_x:.2}\" y=\"{:.2}\" font-family=\"{FONT_FAMILY}\" font-size=\"{CAPTION_FONT_SIZE}\" fill=\"{}\">{}</text>",
        cy + CAPTION_FONT_SIZE + 2.0,
        node.text,
        escape_xml(&node.caption)
    );
    svg.push_str("</g>");
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
