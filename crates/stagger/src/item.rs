use crate::wm::{self, LaunchError, LinkTarget, ShellCommand, WindowClass};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct MenuLabel(String);

crate::impl_string_newtype!(MenuLabel);

/// What happens when an entry is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    Link(LinkTarget),
    Exec {
        command: ShellCommand,
        class: Option<WindowClass>,
    },
}

impl ItemAction {
    pub fn activate(&self) -> Result<(), LaunchError> {
        match self {
            Self::Link(link) => wm::open_link(link),
            Self::Exec { command, class } => wm::run_or_raise(class.as_ref(), command),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: MenuLabel,
    pub aria_label: Option<String>,
    pub action: Option<ItemAction>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: MenuLabel::new(label),
            aria_label: None,
            action: None,
        }
    }

    pub fn with_action(mut self, action: ItemAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn accessible_name(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(self.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialItem {
    pub label: MenuLabel,
    pub link: LinkTarget,
}

/// Display index of the entry at `index`: `01`, `02`, ...
pub fn numbering(index: usize) -> String {
    format!("{:02}", index + 1)
}
