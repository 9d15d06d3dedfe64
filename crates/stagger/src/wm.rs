use derive_more::{AsRef, Deref, Display, From, Into};
use hyprland::data::{Clients, Monitors};
use hyprland::dispatch::{Dispatch, DispatchType, WindowIdentifier};
use hyprland::error::HyprError;
use hyprland::prelude::*;
use hyprland::shared::Address;
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct WindowClass(String);

crate::impl_string_newtype!(WindowClass);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct MonitorName(String);

crate::impl_string_newtype!(MonitorName);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ShellCommand(String);

crate::impl_string_newtype!(ShellCommand);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct LinkTarget(String);

crate::impl_string_newtype!(LinkTarget);

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Hypr(#[from] HyprError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn get_active_monitor() -> Option<MonitorName> {
    Monitors::get()
        .ok()?
        .into_iter()
        .find(|m| m.focused)
        .map(|m| MonitorName(m.name))
}

fn focus_window(address: &Address) -> Result<(), HyprError> {
    Dispatch::call(DispatchType::FocusWindow(WindowIdentifier::Address(
        address.clone(),
    )))
}

fn spawn_detached(program: &str, args: &[&str]) -> std::io::Result<()> {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

/// Focuses the first client whose class matches `class`, or runs `exec` when none does.
///
/// Without a class the command always runs.
pub fn run_or_raise(class: Option<&WindowClass>, exec: &ShellCommand) -> Result<(), LaunchError> {
    if let Some(class) = class {
        let client = Clients::get()?
            .into_iter()
            .find(|c| c.class.eq_ignore_ascii_case(class.as_str()));
        if let Some(client) = client {
            log::debug!("raising existing '{}' window", class);
            return Ok(focus_window(&client.address)?);
        }
    }
    log::debug!("spawning '{}'", exec);
    Ok(spawn_detached("sh", &["-c", exec.as_str()])?)
}

pub fn open_link(link: &LinkTarget) -> Result<(), LaunchError> {
    log::debug!("opening link '{}'", link);
    Ok(spawn_detached("xdg-open", &[link.as_str()])?)
}
