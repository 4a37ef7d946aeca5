//! Recording WidgetHost that needs no GPU or imgui context

use super::{TreeNodeOptions, TreeNodeResponse, WidgetHost};
use std::collections::{HashMap, HashSet};

/// Scripted user input, consumed by the first matching widget
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Toggle,
    SetInt(i64),
    SetFloat(f64),
    SetText(String),
    Drag(Vec<f32>),
    Choose(usize),
    Click,
}

/// What a recorded row showed at the end of its draw
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    Text,
    Disabled,
    Error,
    Checkbox(bool),
    Int(i64),
    Float(f64),
    TextInput(String),
    Drag(Vec<f32>),
    Combo { selected: usize, items: Vec<String> },
    TreeNode { open: bool, leaf: bool, selected: bool },
    Button,
    Separator,
    Window,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub kind: RowKind,
    /// Tree depth at which the row was drawn
    pub depth: usize,
    /// Pushed ids and open tree labels leading to the row, joined by '/'
    pub path: String,
}

/// Headless widget host for driving panels in tests
///
/// Interactions are keyed by label, or by `path/label` for disambiguation, and
/// apply once. Tree nodes honour `default_open` unless collapsed explicitly.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    rows: Vec<Row>,
    pending: HashMap<String, Interaction>,
    expanded: HashSet<String>,
    collapsed: HashSet<String>,
    scopes: Vec<String>,
    depth: usize,
    shift: bool,
    gui_focused: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an interaction for the next widget with this label
    pub fn interact(&mut self, label: impl Into<String>, interaction: Interaction) -> &mut Self {
        self.pending.insert(label.into(), interaction);
        self
    }

    pub fn expand(&mut self, label: impl Into<String>) -> &mut Self {
        let label = label.into();
        self.collapsed.remove(&label);
        self.expanded.insert(label);
        self
    }

    pub fn collapse(&mut self, label: impl Into<String>) -> &mut Self {
        let label = label.into();
        self.expanded.remove(&label);
        self.collapsed.insert(label);
        self
    }

    pub fn set_shift(&mut self, held: bool) {
        self.shift = held;
    }

    pub fn set_gui_focused(&mut self, focused: bool) {
        self.gui_focused = focused;
    }

    /// Rows drawn since the last call, clearing the record for the next frame
    pub fn take_rows(&mut self) -> Vec<Row> {
        self.scopes.clear();
        self.depth = 0;
        std::mem::take(&mut self.rows)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// First row with this label
    pub fn row(&self, label: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Interactions not consumed by any widget yet
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn path(&self) -> String {
        self.scopes.join("/")
    }

    fn take_interaction(&mut self, label: &str) -> Option<Interaction> {
        let qualified = if self.scopes.is_empty() {
            label.to_string()
        } else {
            format!("{}/{label}", self.path())
        };
        if let Some(interaction) = self.pending.remove(&qualified) {
            return Some(interaction);
        }
        let suffix = self
            .pending
            .keys()
            .find(|key| key.contains('/') && qualified.ends_with(&format!("/{key}")))
            .cloned();
        match suffix {
            Some(key) => self.pending.remove(&key),
            None => self.pending.remove(label),
        }
    }

    fn record(&mut self, label: &str, kind: RowKind) {
        self.rows.push(Row {
            label: label.to_string(),
            kind,
            depth: self.depth,
            path: self.path(),
        });
    }
}

impl WidgetHost for HeadlessHost {
    fn text(&mut self, text: &str) {
        self.record(text, RowKind::Text);
    }

    fn text_disabled(&mut self, text: &str) {
        self.record(text, RowKind::Disabled);
    }

    fn error_text(&mut self, text: &str) {
        self.record(text, RowKind::Error);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let changed = matches!(self.take_interaction(label), Some(Interaction::Toggle));
        if changed {
            *value = !*value;
        }
        self.record(label, RowKind::Checkbox(*value));
        changed
    }

    fn input_i32(&mut self, label: &str, value: &mut i32) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::SetInt(v)) => {
                *value = v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                true
            }
            _ => false,
        };
        self.record(label, RowKind::Int(*value as i64));
        changed
    }

    fn input_i64(&mut self, label: &str, value: &mut i64) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::SetInt(v)) => {
                *value = v;
                true
            }
            _ => false,
        };
        self.record(label, RowKind::Int(*value));
        changed
    }

    fn input_f32(&mut self, label: &str, value: &mut f32) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::SetFloat(v)) => {
                *value = v as f32;
                true
            }
            _ => false,
        };
        self.record(label, RowKind::Float(*value as f64));
        changed
    }

    fn input_f64(&mut self, label: &str, value: &mut f64) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::SetFloat(v)) => {
                *value = v;
                true
            }
            _ => false,
        };
        self.record(label, RowKind::Float(*value));
        changed
    }

    fn input_text(&mut self, label: &str, value: &mut String) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::SetText(text)) => {
                *value = text;
                true
            }
            _ => false,
        };
        self.record(label, RowKind::TextInput(value.clone()));
        changed
    }

    fn drag_floats(&mut self, label: &str, values: &mut [f32], _speed: f32) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::Drag(new_values)) => {
                for (slot, v) in values.iter_mut().zip(new_values) {
                    *slot = v;
                }
                true
            }
            _ => false,
        };
        self.record(label, RowKind::Drag(values.to_vec()));
        changed
    }

    fn combo(&mut self, label: &str, current: &mut usize, items: &[String]) -> bool {
        let changed = match self.take_interaction(label) {
            Some(Interaction::Choose(index)) if index < items.len() => {
                *current = index;
                true
            }
            _ => false,
        };
        self.record(
            label,
            RowKind::Combo {
                selected: *current,
                items: items.to_vec(),
            },
        );
        changed
    }

    fn tree_node(&mut self, label: &str, options: TreeNodeOptions) -> TreeNodeResponse {
        let clicked = matches!(self.take_interaction(label), Some(Interaction::Click));
        let open = if self.collapsed.contains(label) {
            false
        } else {
            options.leaf || options.default_open || self.expanded.contains(label)
        };
        self.record(
            label,
            RowKind::TreeNode {
                open,
                leaf: options.leaf,
                selected: options.selected,
            },
        );
        if open {
            self.scopes.push(label.to_string());
            self.depth += 1;
        }
        TreeNodeResponse { open, clicked }
    }

    fn tree_pop(&mut self) {
        self.scopes.pop();
        self.depth = self.depth.saturating_sub(1);
    }

    fn button(&mut self, label: &str) -> bool {
        let clicked = matches!(self.take_interaction(label), Some(Interaction::Click));
        self.record(label, RowKind::Button);
        clicked
    }

    fn separator(&mut self) {
        self.record("", RowKind::Separator);
    }

    fn push_id(&mut self, id: &str) {
        self.scopes.push(id.to_string());
    }

    fn pop_id(&mut self) {
        self.scopes.pop();
    }

    fn begin_window(&mut self, title: &str) -> bool {
        self.record(title, RowKind::Window);
        self.scopes.push(title.to_string());
        true
    }

    fn end_window(&mut self) {
        self.scopes.pop();
    }

    fn extend_selection_held(&self) -> bool {
        self.shift
    }

    fn gui_wants_input(&self) -> bool {
        self.gui_focused
    }
}
