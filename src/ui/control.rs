//! Control tree model
//!
//! The host's window hierarchy as plain data. Ordinary container nesting
//! (`Control::children`) and menu drop-down nesting (`MenuItem::drop_down`)
//! are separate relations.

use serde::{Deserialize, Serialize};

/// A node attached to a control's child collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Control(Control),
    MenuStrip(MenuStrip),
}

/// Control kinds that matter for translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlKind {
    /// Labels, buttons, group boxes, forms and anything else with caption text
    #[default]
    Standard,
    ListControl,
    TextInput,
    LinkLabel,
    NumericInput,
    ContainerControl,
}

impl ControlKind {
    /// Whether the control's own text must never be rewritten
    ///
    /// The text of these kinds is user data or a value, not a caption.
    pub fn is_excluded(self) -> bool {
        !matches!(self, ControlKind::Standard)
    }
}

/// A window, form or widget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Control {
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub kind: ControlKind,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_menu: Option<MenuStrip>,
}

impl Control {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: ControlKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_context_menu(mut self, menu: MenuStrip) -> Self {
        self.context_menu = Some(menu);
        self
    }

    /// Find the text of a descendant control or menu item by name
    pub fn find_text(&self, name: &str) -> Option<&str> {
        if self.name == name {
            return Some(&self.text);
        }
        if let Some(text) = self.context_menu.as_ref().and_then(|menu| menu.find_text(name)) {
            return Some(text);
        }
        self.children.iter().find_map(|child| match child {
            Node::Control(control) => control.find_text(name),
            Node::MenuStrip(strip) => strip.find_text(name),
        })
    }
}

/// A menu bar, tool bar or context menu
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuStrip {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ToolStripItem>,
}

impl MenuStrip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: impl Into<ToolStripItem>) -> Self {
        self.items.push(item.into());
        self
    }

    fn find_text(&self, name: &str) -> Option<&str> {
        find_item_text(&self.items, name)
    }

    /// Mutable access to a menu item anywhere in the strip
    pub fn find_menu_item_mut(&mut self, name: &str) -> Option<&mut MenuItem> {
        find_item_mut(&mut self.items, name)
    }
}

/// An entry of a menu strip or drop-down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolStripItem {
    MenuItem(MenuItem),
    Separator,
    /// Combo boxes, text boxes and other hosted items
    Other {
        name: String,
        #[serde(default)]
        text: String,
    },
}

/// A clickable menu entry, possibly owning a drop-down
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub drop_down: Vec<ToolStripItem>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            drop_down: Vec::new(),
        }
    }

    pub fn with_drop_down(mut self, item: impl Into<ToolStripItem>) -> Self {
        self.drop_down.push(item.into());
        self
    }

    pub fn has_drop_down_items(&self) -> bool {
        !self.drop_down.is_empty()
    }
}

fn find_item_text<'a>(items: &'a [ToolStripItem], name: &str) -> Option<&'a str> {
    items.iter().find_map(|item| match item {
        ToolStripItem::MenuItem(menu_item) if menu_item.name == name => Some(menu_item.text.as_str()),
        ToolStripItem::MenuItem(menu_item) => find_item_text(&menu_item.drop_down, name),
        ToolStripItem::Other { name: other, text } if other == name => Some(text.as_str()),
        _ => None,
    })
}

fn find_item_mut<'a>(items: &'a mut [ToolStripItem], name: &str) -> Option<&'a mut MenuItem> {
    for item in items.iter_mut() {
        if let ToolStripItem::MenuItem(menu_item) = item {
            if menu_item.name == name {
                return Some(menu_item);
            }
            if let Some(found) = find_item_mut(&mut menu_item.drop_down, name) {
                return Some(found);
            }
        }
    }
    None
}

impl From<Control> for Node {
    fn from(control: Control) -> Self {
        Node::Control(control)
    }
}

impl From<MenuStrip> for Node {
    fn from(strip: MenuStrip) -> Self {
        Node::MenuStrip(strip)
    }
}

impl From<MenuItem> for ToolStripItem {
    fn from(item: MenuItem) -> Self {
        ToolStripItem::MenuItem(item)
    }
}
