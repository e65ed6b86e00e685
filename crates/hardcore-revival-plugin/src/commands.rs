//! Admin commands: `hrreload` and `hrcheck`.

use hardcore_revival_core::error::DomainError;
use hardcore_revival_core::player::CommandSender;
use hardcore_revival_core::text;
use hardcore_revival_ritual::application::query_handlers::{self, LifeStatus};
use tracing::{info, instrument};

use crate::error::PluginError;
use crate::plugin::RevivalPlugin;

/// Permission both commands require.
pub const ADMIN_PERMISSION: &str = "hardcorerevival.admin";

/// Reloads the configuration.
pub const RELOAD_COMMAND: &str = "hrreload";

/// Reports a player's revival status.
pub const CHECK_COMMAND: &str = "hrcheck";

impl RevivalPlugin {
    /// Runs an admin command and returns the reply for the sender, or
    /// `None` when `label` is not one of this plugin's commands.
    ///
    /// # Errors
    ///
    /// Returns `PluginError::Domain` if the store cannot be read.
    #[instrument(
        skip(self, sender),
        fields(sender = sender.as_player().map_or("console", |p| p.name.as_str()))
    )]
    pub async fn on_command(
        &self,
        sender: &CommandSender,
        label: &str,
        args: &[&str],
    ) -> Result<Option<String>, PluginError> {
        let config = self.config().await;
        let messages = &config.messages;
        let label = label.to_ascii_lowercase();
        if label != RELOAD_COMMAND && label != CHECK_COMMAND {
            return Ok(None);
        }
        if !sender.has_permission(ADMIN_PERMISSION) {
            return Ok(Some(messages.raw(&messages.errors.no_permission)));
        }

        if label == RELOAD_COMMAND {
            return Ok(Some(self.reload_command().await));
        }

        let Some(name) = args
            .first()
            .copied()
            .or_else(|| sender.as_player().map(|p| p.name.as_str()))
        else {
            return Ok(Some(messages.raw(&messages.errors.unknown_player)));
        };

        let view = match query_handlers::get_player_status(
            name,
            self.host.as_ref(),
            self.repository.as_ref(),
        )
        .await
        {
            Ok(view) => view,
            Err(DomainError::PlayerNotFound(_)) => {
                return Ok(Some(messages.raw(&messages.errors.unknown_player)));
            }
            Err(e) => return Err(e.into()),
        };

        let template = match view.status {
            LifeStatus::Pending => &messages.command.check_pending,
            LifeStatus::Dead => &messages.command.check_dead,
            LifeStatus::Alive => &messages.command.check_alive,
        };
        Ok(Some(messages.raw(&text::with_player(template, &view.profile.name))))
    }

    async fn reload_command(&self) -> String {
        match self.reload().await {
            Ok(()) => {
                info!("configuration reloaded by command");
                let config = self.config().await;
                config.messages.raw(&config.messages.command.reload)
            }
            Err(e) => {
                let config = self.config().await;
                config
                    .messages
                    .raw(&format!("&cFailed to reload configuration: {e}"))
            }
        }
    }
}
