//! Combat module: hit trigger, реакция врагов, счёт
//!
//! Порядок в FixedUpdate (после locomotion, в LocomotionSet::React):
//! 1. detect_trigger_hits - enter edge пересечений → GotHit
//! 2. react_to_hits - HitReaction + animation trigger + очки
//! 3. tick_hit_reactions - таймеры реакции
//!
//! Scoreboard и его публикация - ScorePlugin / ScoreWriter (score.rs).

use bevy::prelude::*;

pub mod hit;
pub mod score;

// Re-export основных типов
pub use hit::{collect_enter_hits, detect_trigger_hits, react_to_hits, tick_hit_reactions, trigger_center, GotHit};
pub use score::{
    format_score, install_scoreboard, publish_initial_score, ScoreChanged, ScorePlugin, ScoreText, ScoreWriter,
    Scoreboard,
    ENEMY_HIT_SCORE,
};

/// Combat Plugin
///
/// Требует Scoreboard (ставится ScorePlugin, который CombatPlugin добавляет сам).
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ScorePlugin::default());

        app.add_event::<GotHit>();

        app.add_systems(
            FixedUpdate,
            (detect_trigger_hits, react_to_hits, tick_hit_reactions)
                .chain() // Последовательное выполнение
                .in_set(crate::locomotion::LocomotionSet::React),
        );
    }
}
