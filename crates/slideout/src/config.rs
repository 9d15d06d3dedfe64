use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use stagger::MenuOptions;
use stagger::color::HexColor;
use stagger::item::{ItemAction, MenuItem, MenuLabel, SocialItem};
use stagger::label::{DEFAULT_CYCLES, MAX_CYCLES};
use stagger::layout::Position;
use stagger::wm::{LinkTarget, ShellCommand, WindowClass};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exec value of the placeholder entry shown before a config file exists.
pub const SETUP_COMMAND: &str = "STAGGER_SETUP";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: MenuLabel,
    pub aria_label: Option<String>,
    pub link: Option<LinkTarget>,
    pub exec: Option<ShellCommand>,
    pub class: Option<WindowClass>,
}

impl ItemConfig {
    /// `exec` wins over `link` when both are set.
    pub fn to_item(&self) -> MenuItem {
        let action = match (&self.exec, &self.link) {
            (Some(command), _) => Some(ItemAction::Exec {
                command: command.clone(),
                class: self.class.clone(),
            }),
            (None, Some(link)) => Some(ItemAction::Link(link.clone())),
            (None, None) => None,
        };
        MenuItem {
            label: self.label.clone(),
            aria_label: self.aria_label.clone(),
            action,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocialConfig {
    pub label: MenuLabel,
    pub link: LinkTarget,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    pub idle: String,
    pub active: String,
    pub cycles: usize,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            idle: "Menu".to_string(),
            active: "Close".to_string(),
            cycles: DEFAULT_CYCLES,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub position: Position,
    pub colors: Vec<HexColor>,
    pub accent_color: HexColor,
    pub menu_button_color: HexColor,
    pub open_menu_button_color: HexColor,
    pub change_menu_color_on_open: bool,
    pub display_layers: bool,
    pub display_item_numbering: bool,
    pub display_socials: bool,
    pub brand: String,
    pub logo_exec: Option<ShellCommand>,
    pub labels: LabelConfig,
    pub items: Vec<ItemConfig>,
    pub socials: Vec<SocialConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = MenuOptions::default();
        Self {
            position: defaults.position,
            colors: defaults.colors,
            accent_color: defaults.accent_color,
            menu_button_color: defaults.menu_button_color,
            open_menu_button_color: defaults.open_menu_button_color,
            change_menu_color_on_open: defaults.change_menu_color_on_open,
            display_layers: defaults.display_layers,
            display_item_numbering: defaults.display_item_numbering,
            display_socials: defaults.display_socials,
            brand: "stagger".to_string(),
            logo_exec: None,
            labels: LabelConfig::default(),
            items: Vec::new(),
            socials: Vec::new(),
        }
    }
}

impl Config {
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            position: self.position,
            items: self.items.iter().map(ItemConfig::to_item).collect(),
            socials: self
                .socials
                .iter()
                .map(|s| SocialItem {
                    label: s.label.clone(),
                    link: s.link.clone(),
                })
                .collect(),
            colors: self.colors.clone(),
            accent_color: self.accent_color,
            menu_button_color: self.menu_button_color,
            open_menu_button_color: self.open_menu_button_color,
            change_menu_color_on_open: self.change_menu_color_on_open,
            display_layers: self.display_layers,
            display_item_numbering: self.display_item_numbering,
            display_socials: self.display_socials,
            idle_label: self.labels.idle.clone(),
            active_label: self.labels.active.clone(),
            label_cycles: self.labels.cycles.min(MAX_CYCLES),
        }
    }

    fn setup() -> Self {
        Self {
            items: vec![ItemConfig {
                label: MenuLabel::from("Setup"),
                aria_label: Some("Create a configuration file".to_string()),
                link: None,
                exec: Some(ShellCommand::from(SETUP_COMMAND)),
                class: None,
            }],
            ..Default::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "stagger", "stagger").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("STAGGER"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the user config, falling back to a single setup entry when there is
/// no file yet or it cannot be read.
pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        return Config::setup();
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using setup menu: {}", e);
        Config::setup()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return Ok(());
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return Ok(());
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if touches_config(&event, &config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config_parses() {
        let config = parse(DEFAULT_CONFIG);
        assert!(!config.items.is_empty());
        let options = config.menu_options();
        assert_eq!(options.items.len(), config.items.len());
        assert_eq!(options.layout().items, config.items.len());
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = parse("position = \"left\"\n");
        assert_eq!(config.position, Position::Left);
        assert!(config.change_menu_color_on_open);
        assert_eq!(config.labels.cycles, DEFAULT_CYCLES);
        assert_eq!(config.colors.len(), 2);
    }

    #[test]
    fn test_item_actions() {
        let config = parse(
            r##"
[[items]]
label = "Terminal"
exec = "foot"
class = "foot"

[[items]]
label = "Docs"
link = "https://example.com"

[[items]]
label = "Both"
exec = "true"
link = "https://example.com"

[[items]]
label = "Nothing"
"##,
        );
        let items: Vec<MenuItem> = config.items.iter().map(ItemConfig::to_item).collect();
        assert_eq!(
            items[0].action,
            Some(ItemAction::Exec {
                command: ShellCommand::from("foot"),
                class: Some(WindowClass::from("foot")),
            })
        );
        assert_eq!(
            items[1].action,
            Some(ItemAction::Link(LinkTarget::from("https://example.com")))
        );
        assert!(matches!(items[2].action, Some(ItemAction::Exec { .. })));
        assert_eq!(items[3].action, None);
    }

    #[test]
    fn test_social_and_labels_from_json() {
        let social: SocialConfig =
            serde_json::from_str(r#"{"label": "GitHub", "link": "https://github.com"}"#).unwrap();
        assert_eq!(social.label.as_str(), "GitHub");

        let labels: LabelConfig = serde_json::from_str(r#"{"idle": "Open"}"#).unwrap();
        assert_eq!(labels.idle, "Open");
        assert_eq!(labels.active, "Close");
        assert_eq!(labels.cycles, DEFAULT_CYCLES);

        assert!(serde_json::from_str::<SocialConfig>(r#"{"label": "x"}"#).is_err());
    }

    #[test]
    fn test_label_cycles_are_capped() {
        let config = parse("[labels]\ncycles = 1000000\n");
        assert_eq!(config.labels.cycles, 1_000_000);
        assert_eq!(config.menu_options().label_cycles, MAX_CYCLES);

        let config = parse("[labels]\ncycles = 2\n");
        assert_eq!(config.menu_options().label_cycles, 2);
    }

    #[test]
    fn test_bad_colour_is_rejected() {
        let result: Result<Config, _> = config::Config::builder()
            .add_source(config::File::from_str(
                "accent_color = \"#zzzzzz\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_setup_menu_has_setup_entry() {
        let config = Config::setup();
        assert_eq!(config.items.len(), 1);
        assert_eq!(
            config.items[0].exec.as_ref().map(|e| e.as_str()),
            Some(SETUP_COMMAND)
        );
    }

    #[test]
    fn test_only_config_file_events_reload() {
        let path = PathBuf::from("/tmp/stagger/config.toml");
        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        let other = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/tmp/stagger/other.toml"));
        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(path.clone());

        assert!(touches_config(&modify, &path));
        assert!(!touches_config(&other, &path));
        assert!(!touches_config(&access, &path));
    }
}
