//! Hit trigger → GotHit → реакция врага
//!
//! Архитектура:
//! - HitTrigger (сфера) висит на атакующем, двигается/поворачивается вместе с ним
//! - Каждый тик: кто из Enemy внутри сферы? Новые (enter edge) → GotHit
//! - GotHit → HitReaction + hit trigger анимации + очки в Scoreboard

use bevy::prelude::*;

use super::score::{ScoreWriter, ENEMY_HIT_SCORE};
use crate::components::{AnimationParams, Enemy, HitReaction, HitTrigger};

/// Событие: по entity попали
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GotHit {
    pub target: Entity,
    pub source: Entity,
}

/// Центр trigger сферы в world space
pub fn trigger_center(trigger: &HitTrigger, owner: &Transform) -> Vec3 {
    owner.translation + owner.rotation * trigger.offset
}

/// Обновляет набор пересечений и возвращает только новые (enter edge)
///
/// Владелец trigger'а в кандидатах игнорируется.
pub fn collect_enter_hits(
    trigger: &mut HitTrigger,
    owner: Entity,
    center: Vec3,
    candidates: impl IntoIterator<Item = (Entity, Vec3)>,
) -> Vec<Entity> {
    let mut entered = Vec::new();
    let mut current = std::collections::HashSet::new();

    for (target, position) in candidates {
        if target == owner {
            continue;
        }

        if center.distance(position) < trigger.radius {
            current.insert(target);
            if !trigger.overlapping.contains(&target) {
                entered.push(target);
            }
        }
    }

    // Детерминированный порядок событий (HashSet порядок не гарантирует)
    entered.sort_by_key(|entity| entity.to_bits());
    trigger.overlapping = current;

    entered
}

/// Система: detect trigger overlaps с врагами
pub fn detect_trigger_hits(
    mut triggers: Query<(Entity, &mut HitTrigger, &Transform)>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    mut hit_events: EventWriter<GotHit>,
) {
    for (owner, mut trigger, owner_transform) in triggers.iter_mut() {
        let center = trigger_center(&trigger, owner_transform);
        let candidates = enemies.iter().map(|(entity, transform)| (entity, transform.translation));

        for target in collect_enter_hits(&mut trigger, owner, center, candidates) {
            hit_events.write(GotHit { target, source: owner });
        }
    }
}

/// Система: враг реагирует на попадание и приносит очки
///
/// GotHit по не-врагу (нет Enemy/HitReaction) игнорируется.
pub fn react_to_hits(
    mut hit_events: EventReader<GotHit>,
    mut enemies: Query<(&mut HitReaction, Option<&mut AnimationParams>), With<Enemy>>,
    mut score: ScoreWriter,
) {
    for event in hit_events.read() {
        let Ok((mut reaction, animation)) = enemies.get_mut(event.target) else {
            crate::log(&format!("GotHit: target {:?} не враг, пропускаем", event.target));
            continue;
        };

        reaction.trigger();
        if let Some(mut animation) = animation {
            animation.trigger_hit();
        }

        // Каждое попадание - отдельный ScoreChanged
        score.add(ENEMY_HIT_SCORE);

        crate::log(&format!(
            "Hit: {:?} → {:?} (hits taken: {})",
            event.source, event.target, reaction.hits_taken
        ));
    }
}

/// Система: tick таймеров реакции
pub fn tick_hit_reactions(mut reactions: Query<&mut HitReaction>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for mut reaction in reactions.iter_mut() {
        reaction.tick(delta);
    }
}
