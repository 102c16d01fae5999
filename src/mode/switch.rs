//! Mode switching.

use super::{Mode, ModeState, OptionSet, list_available_modes};
use crate::settings::SettingsStore;
use tracing::{debug, info};

/// Switch to `requested`, returning the message shown to the user.
///
/// An unknown name leaves `state` untouched and returns an `Invalid mode`
/// message listing the valid modes. Otherwise the mode becomes active, its
/// configuration is derived from `options`, and the choice is persisted on a
/// best-effort basis: a persistence failure is logged and does not change
/// the reported outcome.
pub fn switch_mode(
    state: &mut ModeState,
    store: &SettingsStore,
    requested: &str,
    options: &OptionSet,
) -> String {
    let mode: Mode = match requested.parse() {
        Ok(mode) => mode,
        Err(err) => {
            debug!(requested, "Rejected writer mode switch");
            return format!("❌ {err}\n\n{}", list_available_modes());
        }
    };

    state.set(mode);
    let config = mode.configure(options);

    if let Err(e) = store.persist(mode, options) {
        debug!("Could not update settings file: {}", e);
    }
    info!(mode = %mode, "Switched writer mode");

    let settings = config
        .settings
        .iter()
        .map(|setting| format!("- {}: {}", setting.label, setting.value))
        .collect::<Vec<_>>()
        .join("\n");
    let commands = config
        .commands
        .iter()
        .map(|command| format!("- {command}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "✅ **Mode switched to: {}**\n\n{}\n\n**Active Settings:**\n{settings}\n\n**Available Commands:**\n{commands}\n\n**Tip:** Use `/mode show` to see current mode details",
        mode.name().to_uppercase(),
        config.description
    )
}
