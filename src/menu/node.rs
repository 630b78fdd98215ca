use serde::{Deserialize, Serialize};

/// Value of the `target` field for links that open in a new tab.
pub const BLANK_TARGET: &str = "_blank";

/// A single node of a rendered menu tree, in the wire format consumed by the
/// front-end menu widget. The `type` discriminator is `link`, `dropdown` or
/// `divider`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderNode {
    Link(LinkNode),
    Dropdown(DropdownNode),
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    pub href: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A dropdown of child nodes. The user-menu variant carries presentation
/// fields (avatar image, names, CSS class) instead of a label; all of them
/// are omitted from the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub items: Vec<RenderNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superuser: Option<bool>,
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl DropdownNode {
    pub fn new(label: impl Into<String>, items: Vec<RenderNode>) -> Self {
        Self {
            label: Some(label.into()),
            items,
            image: None,
            firstname: None,
            name: None,
            superuser: None,
            class_name: None,
        }
    }
}

impl RenderNode {
    /// A same-tab link.
    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        RenderNode::Link(LinkNode {
            href: href.into(),
            label: label.into(),
            target: None,
        })
    }

    /// A link that opens in a new tab (`target: "_blank"`).
    pub fn external_link(href: impl Into<String>, label: impl Into<String>) -> Self {
        RenderNode::Link(LinkNode {
            href: href.into(),
            label: label.into(),
            target: Some(BLANK_TARGET.to_string()),
        })
    }

    pub fn dropdown(label: impl Into<String>, items: Vec<RenderNode>) -> Self {
        RenderNode::Dropdown(DropdownNode::new(label, items))
    }

    pub fn divider() -> Self {
        RenderNode::Divider
    }
}
