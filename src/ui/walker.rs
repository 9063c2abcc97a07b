//! Discovery of translatable text in a control tree
//!
//! Two recursions are composed here: the walk over `Control::children` and
//! the walk over menu drop-downs. Both are depth-first and pre-order, in the
//! order children were attached.

use std::slice;
use crate::utils::helpers::is_blank;
use super::control::{Control, MenuItem, MenuStrip, Node, ToolStripItem};

/// A node whose text may be rewritten
#[derive(Debug, Clone, Copy)]
pub enum Translatable<'a> {
    Control(&'a Control),
    MenuItem(&'a MenuItem),
}

impl<'a> Translatable<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Translatable::Control(control) => &control.name,
            Translatable::MenuItem(item) => &item.name,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            Translatable::Control(control) => &control.text,
            Translatable::MenuItem(item) => &item.text,
        }
    }
}

/// Every menu item of a strip with non-blank text, drop-downs included
pub fn menu_items(strip: &MenuStrip) -> MenuItems<'_> {
    MenuItems::new(&strip.items)
}

/// Every translatable node below `root`, excluding `root` itself
pub fn translatable_controls(root: &Control) -> TranslatableControls<'_> {
    TranslatableControls {
        stack: vec![Frame::Nodes(root.children.iter())],
    }
}

/// Lazy walk over menu items and their drop-downs
#[derive(Debug, Clone)]
pub struct MenuItems<'a> {
    stack: Vec<slice::Iter<'a, ToolStripItem>>,
}

impl<'a> MenuItems<'a> {
    fn new(items: &'a [ToolStripItem]) -> Self {
        Self {
            stack: vec![items.iter()],
        }
    }
}

impl<'a> Iterator for MenuItems<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let items = self.stack.last_mut()?;
            match items.next() {
                None => {
                    self.stack.pop();
                }
                Some(ToolStripItem::MenuItem(item)) => {
                    if item.has_drop_down_items() {
                        self.stack.push(item.drop_down.iter());
                    }
                    if !is_blank(&item.text) {
                        return Some(item);
                    }
                }
                // separators and hosted controls carry no menu text
                Some(_) => {}
            }
        }
    }
}

#[derive(Debug, Clone)]
enum Frame<'a> {
    Nodes(slice::Iter<'a, Node>),
    Menu(MenuItems<'a>),
    Single(&'a Control),
}

/// Lazy walk over the translatable nodes of a control tree
#[derive(Debug, Clone)]
pub struct TranslatableControls<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for TranslatableControls<'a> {
    type Item = Translatable<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame {
                Frame::Nodes(nodes) => match nodes.next() {
                    None => {
                        self.stack.pop();
                    }
                    Some(Node::MenuStrip(strip)) => {
                        self.stack.push(Frame::Menu(menu_items(strip)));
                    }
                    Some(Node::Control(control)) => self.push_control(control),
                },
                Frame::Menu(items) => match items.next() {
                    Some(item) => return Some(Translatable::MenuItem(item)),
                    None => {
                        self.stack.pop();
                    }
                },
                Frame::Single(control) => {
                    let control = *control;
                    self.stack.pop();
                    return Some(Translatable::Control(control));
                }
            }
        }
    }
}

impl<'a> TranslatableControls<'a> {
    /// Schedule a control: its context menu, then itself, then its children
    fn push_control(&mut self, control: &'a Control) {
        if !control.children.is_empty() {
            self.stack.push(Frame::Nodes(control.children.iter()));
        }
        if is_blank(&control.name) {
            return;
        }
        if !control.kind.is_excluded() && !is_blank(&control.text) {
            self.stack.push(Frame::Single(control));
        }
        if let Some(menu) = &control.context_menu {
            self.stack.push(Frame::Menu(menu_items(menu)));
        }
    }
}

/// Visit the same nodes as [`translatable_controls`] with write access
///
/// The visitor receives the node name and its text.
pub fn for_each_translatable_mut<F>(root: &mut Control, mut visit: F)
where
    F: FnMut(&str, &mut String),
{
    visit_nodes_mut(&mut root.children, &mut visit);
}

fn visit_nodes_mut<F>(nodes: &mut [Node], visit: &mut F)
where
    F: FnMut(&str, &mut String),
{
    for node in nodes {
        match node {
            Node::MenuStrip(strip) => visit_menu_items_mut(&mut strip.items, visit),
            Node::Control(control) => {
                if !is_blank(&control.name) {
                    if let Some(menu) = control.context_menu.as_mut() {
                        visit_menu_items_mut(&mut menu.items, visit);
                    }
                    if !control.kind.is_excluded() && !is_blank(&control.text) {
                        visit(&control.name, &mut control.text);
                    }
                }
                visit_nodes_mut(&mut control.children, visit);
            }
        }
    }
}

fn visit_menu_items_mut<F>(items: &mut [ToolStripItem], visit: &mut F)
where
    F: FnMut(&str, &mut String),
{
    for item in items {
        if let ToolStripItem::MenuItem(item) = item {
            if !is_blank(&item.text) {
                visit(&item.name, &mut item.text);
            }
            visit_menu_items_mut(&mut item.drop_down, visit);
        }
    }
}
