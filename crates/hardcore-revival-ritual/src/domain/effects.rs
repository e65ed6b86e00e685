//! Revival effects: particles, sounds and lightning.

use hardcore_revival_core::config::RevivalConfig;
use hardcore_revival_core::host::{GameHost, ScheduledTask};
use hardcore_revival_core::position::BlockPos;
use tracing::warn;

/// Plays the configured revival effects around an altar centred on
/// `centre`.
///
/// Particles spawn immediately above the altar. Each sound is scheduled
/// after the sum of its own and all earlier delays, so the configured list
/// plays as a sequence. Lightning strikes the centre and is harmless unless
/// `lightningNoDamage` is off. Unknown particle names are logged and
/// skipped.
pub fn play_revival_effects(host: &dyn GameHost, config: &RevivalConfig, centre: &BlockPos) {
    let above = centre.to_location(0.5, 1.5, 0.5);

    for particle in &config.particles {
        if let Err(e) = host.spawn_particle(&above, particle) {
            warn!(error = %e, "skipping configured particle");
        }
    }

    let mut delay = 0;
    for sound in &config.sounds {
        delay += sound.delay;
        host.schedule(
            delay,
            ScheduledTask::PlaySound {
                at: above.clone(),
                sound: sound.clone(),
            },
        );
    }

    host.strike_lightning(
        &centre.to_location(0.5, 0.0, 0.5),
        !config.settings.lightning_no_damage,
    );
}
