//! Organization chart renderer
//!
//! `style` holds the pure per-node visual functions, `layout` walks the tree
//! into a scene, `svg` serializes it and `zoom` models the caller's scale.

pub mod layout;
pub mod style;
pub mod svg;
pub mod zoom;

pub use layout::{render_scene, Scene};
pub use style::Theme;
pub use zoom::Zoom;

use crate::org::node::OrgNode;

/// Lay out and serialize a tree in one go
pub fn render_svg(root: &OrgNode, theme: &Theme, zoom: Zoom) -> String {
    let scene = render_scene(root, theme);
    tracing::debug!(
        nodes = scene.nodes.len(),
        width = scene.width,
        height = scene.height,
        scale = zoom.scale(),
        "Rendered organization chart"
    );
    svg::to_svg(&scene, theme, zoom)
}
