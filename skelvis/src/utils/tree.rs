//! Tree rendering of node hierarchies

use console::Style;
use skelvis_anim::{Node, NodeHierarchy, NodeId};

use super::format::format_vec3;

/// How a hierarchy node is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Bone,
    Transform,
}

impl NodeKind {
    pub fn of(node: &Node) -> Self {
        if node.is_root() {
            Self::Root
        } else if node.is_bone() {
            Self::Bone
        } else {
            Self::Transform
        }
    }

    /// Get emoji icon for node kind
    pub fn icon(self) -> &'static str {
        match self {
            Self::Root => "📁",
            Self::Bone => "🦴",
            Self::Transform => "📍",
        }
    }

    /// Get color style for node kind
    pub fn style(self, no_color: bool) -> Style {
        if no_color {
            Style::new()
        } else {
            match self {
                Self::Root => Style::new().bold().cyan(),
                Self::Bone => Style::new().green(),
                Self::Transform => Style::new().dim(),
            }
        }
    }
}

/// Options for tree rendering
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub max_depth: Option<usize>,
    pub no_color: bool,
    pub show_metadata: bool,
}

struct Pending {
    id: NodeId,
    depth: usize,
    prefix: String,
    is_last: bool,
}

/// Render the hierarchy below its root, parents before children
pub fn render_hierarchy(hierarchy: &NodeHierarchy, options: &TreeOptions) -> String {
    let mut output = String::new();
    let Some(root) = hierarchy.root() else {
        return output;
    };

    let mut stack = vec![Pending {
        id: root,
        depth: 0,
        prefix: String::new(),
        is_last: true,
    }];

    while let Some(entry) = stack.pop() {
        if let Some(max_depth) = options.max_depth
            && entry.depth > max_depth
        {
            continue;
        }

        let node = hierarchy.node(entry.id);
        render_node(node, &entry, &mut output, options);

        let child_prefix = if entry.depth == 0 {
            String::new()
        } else {
            format!("{}{}", entry.prefix, if entry.is_last { "    " } else { "│   " })
        };

        let children = node.children();
        for (i, &child) in children.iter().enumerate().rev() {
            stack.push(Pending {
                id: child,
                depth: entry.depth + 1,
                prefix: child_prefix.clone(),
                is_last: i == children.len() - 1,
            });
        }
    }

    output
}

fn render_node(node: &Node, entry: &Pending, output: &mut String, options: &TreeOptions) {
    let kind = NodeKind::of(node);
    let connector = if entry.depth == 0 {
        ""
    } else if entry.is_last {
        "└── "
    } else {
        "├── "
    };

    output.push_str(&format!(
        "{}{}{} {}\n",
        entry.prefix,
        connector,
        kind.icon(),
        kind.style(options.no_color).apply_to(node.name())
    ));

    if !options.show_metadata {
        return;
    }

    let child_prefix = if entry.depth == 0 {
        ""
    } else if entry.is_last {
        "    "
    } else {
        "│   "
    };
    let meta_prefix = format!("{}{}    ", entry.prefix, child_prefix);
    let meta_style = if options.no_color {
        Style::new()
    } else {
        Style::new().dim()
    };

    let mut metadata = vec![("bind", format_vec3(node.bind_world_position()))];
    if let Some(slot) = node.bone_slot() {
        metadata.push(("slot", slot.to_string()));
    }
    for (key, value) in metadata {
        output.push_str(&format!(
            "{}🏷️  {}: {}\n",
            meta_prefix,
            meta_style.apply_to(key),
            value
        ));
    }
}
