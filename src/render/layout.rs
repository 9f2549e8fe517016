//! Recursive tree layout
//!
//! Walks an [`OrgNode`] once, top-down, and produces a [`Scene`] of boxes and
//! connector lines. Depth is tracked by the walk itself, starting at 0 for the
//! node passed in. The input tree is only borrowed.

use crate::org::node::{NodeKey, OrgNode};

use super::style::{label_color, monogram, node_width, role_fill, Rgb, Theme, NODE_HEIGHT};

/// Horizontal gap between sibling subtrees
pub const SIBLING_GAP: f32 = 16.0;
/// Vertical gap between levels; the connector rail sits halfway
pub const LEVEL_GAP: f32 = 48.0;
pub const MARGIN: f32 = 24.0;
/// Descent stops below this depth
pub const MAX_RENDER_DEPTH: usize = 64;

/// What to draw in a node's avatar slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Monogram(String),
}

/// A positioned node box
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub key: NodeKey,
    pub name: String,
    pub caption: String,
    pub depth: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Rgb,
    pub text: Rgb,
    pub avatar: Avatar,
}

impl NodeBox {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A straight connector segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Connector {
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Laid out chart, in unscaled units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Boxes in pre-order
    pub nodes: Vec<NodeBox>,
    pub connectors: Vec<Connector>,
}

struct Extent {
    width: f32,
    center: f32,
}

struct SceneBuilder<'t> {
    theme: &'t Theme,
    scene: Scene,
    max_depth: usize,
    truncated: bool,
}

/// Lay out `root` and its whole subtree
pub fn render_scene(root: &OrgNode, theme: &Theme) -> Scene {
    let mut builder = SceneBuilder {
        theme,
        scene: Scene::default(),
        max_depth: 0,
        truncated: false,
    };
    let extent = builder.place(root, 0, MARGIN);

    if builder.truncated {
        tracing::warn!(
            max_depth = MAX_RENDER_DEPTH,
            "Organization chart deeper than render limit, deeper levels omitted"
        );
    }

    let levels = builder.max_depth as f32 + 1.0;
    let mut scene = builder.scene;
    scene.width = extent.width + 2.0 * MARGIN;
    scene.height = levels * (NODE_HEIGHT + LEVEL_GAP) - LEVEL_GAP + 2.0 * MARGIN;
    scene
}

impl SceneBuilder<'_> {
    fn place(&mut self, node: &OrgNode, depth: usize, left: f32) -> Extent {
        let width = node_width(depth);
        let top = MARGIN + depth as f32 * (NODE_HEIGHT + LEVEL_GAP);
        self.max_depth = self.max_depth.max(depth);

        let fill = role_fill(&node.role, self.theme);
        let index = self.scene.nodes.len();
        self.scene.nodes.push(NodeBox {
            key: node.id.clone(),
            name: node.name.clone(),
            caption: node.role.label().to_string(),
            depth,
            x: left,
            y: top,
            width,
            height: NODE_HEIGHT,
            fill,
            text: label_color(fill),
            avatar: match &node.image {
                Some(image) => Avatar::Image(image.clone()),
                None => Avatar::Monogram(monogram(&node.name)),
            },
        });

        if node.children.is_empty() {
            return Extent {
                width,
                center: left + width / 2.0,
            };
        }
        if depth + 1 >= MAX_RENDER_DEPTH {
            self.truncated = true;
            return Extent {
                width,
                center: left + width / 2.0,
            };
        }

        let first_node = self.scene.nodes.len();
        let first_connector = self.scene.connectors.len();
        let mut cursor = left;
        let mut centers = Vec::with_capacity(node.children.len());
        for child in &node.children {
            let extent = self.place(child, depth + 1, cursor);
            centers.push(extent.center);
            cursor += extent.width + SIBLING_GAP;
        }
        let span = cursor - SIBLING_GAP - left;

        // Parent wider than its children: centre the children row under it.
        if width > span {
            let dx = (width - span) / 2.0;
            for b in &mut self.scene.nodes[first_node..] {
                b.x += dx;
            }
            for c in &mut self.scene.connectors[first_connector..] {
                c.x1 += dx;
                c.x2 += dx;
            }
            for c in &mut centers {
                *c += dx;
            }
        }
        let total = span.max(width);

        let (first, last) = (centers[0], centers[centers.len() - 1]);
        let x = ((first + last) / 2.0 - width / 2.0)
            .min(left + total - width)
            .max(left);
        self.scene.nodes[index].x = x;
        let center = x + width / 2.0;

        let bottom = top + NODE_HEIGHT;
        let rail = bottom + LEVEL_GAP / 2.0;
        let child_top = bottom + LEVEL_GAP;
        self.scene.connectors.push(Connector {
            x1: center,
            y1: bottom,
            x2: center,
            y2: rail,
        });
        if centers.len() > 1 {
            self.scene.connectors.push(Connector {
                x1: first.min(center),
                y1: rail,
                x2: last.max(center),
                y2: rail,
            });
        }
        for c in &centers {
            self.scene.connectors.push(Connector {
                x1: *c,
                y1: rail,
                x2: *c,
                y2: child_top,
            });
        }

        Extent { width: total, center }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::node::{LeafKind, Role};
    use crate::render::style::{DARK_TEXT, LIGHT_TEXT, MIN_NODE_WIDTH};

    fn node(id: &str, role: Role) -> OrgNode {
        OrgNode::new(NodeKey::entity(id), id, role)
    }

    fn sample() -> OrgNode {
        let mut root = node("m1", Role::BusinessManager);
        let mut a1 = node("a1", Role::Administrator);
        let mut b1 = node("b1", Role::Residential);
        b1.push(OrgNode::summary("b1", LeafKind::Units, 24));
        b1.push(OrgNode::summary("b1", LeafKind::Residents, 38));
        a1.push(b1);
        a1.push(node("b2", Role::Commercial));
        root.push(a1);
        root.push(node("a2", Role::Administrator));
        root
    }

    fn find<'s>(scene: &'s Scene, key: &NodeKey) -> &'s NodeBox {
        scene.nodes.iter().find(|b| &b.key == key).unwrap()
    }

    #[test]
    fn test_leaf_renders_without_connectors() {
        let scene = render_scene(&node("m1", Role::BusinessManager), &Theme::light());
        assert_eq!(scene.nodes.len(), 1);
        assert!(scene.connectors.is_empty());
        assert_eq!(scene.width, 200.0 + 2.0 * MARGIN);
    }

    #[test]
    fn test_every_node_drawn_once_in_tree_order() {
        let tree = sample();
        let scene = render_scene(&tree, &Theme::light());
        let mut expected = Vec::new();
        tree.walk(&mut |n, depth| expected.push((n.id.clone(), depth)));
        let drawn: Vec<(NodeKey, usize)> = scene.nodes.iter().map(|b| (b.key.clone(), b.depth)).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_children_left_to_right() {
        let scene = render_scene(&sample(), &Theme::light());
        let a1 = find(&scene, &NodeKey::entity("a1"));
        let a2 = find(&scene, &NodeKey::entity("a2"));
        assert!(a1.x + a1.width <= a2.x);
        let units = find(&scene, &NodeKey::summary("b1", LeafKind::Units));
        let residents = find(&scene, &NodeKey::summary("b1", LeafKind::Residents));
        assert!(units.x < residents.x);
        assert_eq!(units.width, MIN_NODE_WIDTH);
    }

    #[test]
    fn test_widths_shrink_with_depth() {
        let scene = render_scene(&sample(), &Theme::light());
        for b in &scene.nodes {
            assert_eq!(b.width, node_width(b.depth));
        }
    }

    #[test]
    fn test_connectors_for_multiple_children() {
        let mut root = node("m1", Role::BusinessManager);
        root.push(node("a1", Role::Administrator));
        root.push(node("a2", Role::Administrator));
        let scene = render_scene(&root, &Theme::light());

        // stem, rail, two drops
        assert_eq!(scene.connectors.len(), 4);
        assert!(scene.connectors[0].is_vertical());
        assert!(scene.connectors[1].is_horizontal());
        let parent = &scene.nodes[0];
        assert_eq!(scene.connectors[0].y1, parent.bottom());
        let a1 = find(&scene, &NodeKey::entity("a1"));
        let a2 = find(&scene, &NodeKey::entity("a2"));
        assert_eq!(scene.connectors[1].x1, a1.center_x());
        assert_eq!(scene.connectors[1].x2, a2.center_x());
        assert_eq!(scene.connectors[3].y2, a2.y);
    }

    #[test]
    fn test_single_child_has_no_rail() {
        let mut root = node("m1", Role::BusinessManager);
        root.push(node("a1", Role::Administrator));
        let scene = render_scene(&root, &Theme::light());
        assert_eq!(scene.connectors.len(), 2);
        assert!(scene.connectors.iter().all(Connector::is_vertical));
        assert_eq!(scene.nodes[0].center_x(), scene.nodes[1].center_x());
    }

    #[test]
    fn test_parent_box_within_subtree() {
        let scene = render_scene(&sample(), &Theme::light());
        for b in &scene.nodes {
            assert!(b.x >= MARGIN);
            assert!(b.x + b.width <= scene.width - MARGIN + 0.01);
        }
    }

    #[test]
    fn test_text_color_follows_fill() {
        let scene = render_scene(&sample(), &Theme::light());
        let b1 = find(&scene, &NodeKey::entity("b1"));
        assert_eq!(b1.text, DARK_TEXT);
        let residents = find(&scene, &NodeKey::summary("b1", LeafKind::Residents));
        assert_eq!(residents.text, LIGHT_TEXT);
    }

    #[test]
    fn test_avatar_fallback() {
        let mut root = OrgNode::new(NodeKey::entity("a1"), "Jane Cooper", Role::Administrator)
            .with_image(Some("jane.png".to_string()));
        root.push(OrgNode::new(NodeKey::entity("b1"), "Sunset Towers", Role::Residential));
        let scene = render_scene(&root, &Theme::light());
        assert_eq!(scene.nodes[0].avatar, Avatar::Image("jane.png".to_string()));
        assert_eq!(scene.nodes[1].avatar, Avatar::Monogram("ST".to_string()));
    }

    #[test]
    fn test_depth_guard() {
        let mut root = node("n0", Role::Building);
        for i in (1..100).rev() {
            let mut parent = node(&format!("n{}", i), Role::Building);
            parent.push(root);
            root = parent;
        }
        let scene = render_scene(&root, &Theme::light());
        assert_eq!(scene.nodes.len(), MAX_RENDER_DEPTH);
    }

    #[test]
    fn test_input_not_mutated() {
        let tree = sample();
        let before = tree.clone();
        let _ = render_scene(&tree, &Theme::dark());
        assert_eq!(tree, before);
    }
}
