//! Score aggregator
//!
//! Один Scoreboard на App: ставится ScorePlugin при старте.
//! Повторная установка оставляет первый экземпляр (first wins).
//! Каждое изменение total → ScoreChanged event + ScoreText для UI хоста,
//! сразу в точке изменения (`ScoreWriter::add`), без промежуточных пропусков.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Очки за одно попадание по врагу
pub const ENEMY_HIT_SCORE: u32 = 1;

/// Накопленный счёт
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect, serde::Serialize, serde::Deserialize)]
#[reflect(Resource)]
pub struct Scoreboard {
    total: u32,
}

impl Scoreboard {
    pub fn with_total(total: u32) -> Self {
        Self { total }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Возвращает новый total
    pub fn add(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.total
    }
}

/// Текст для score label (рендер - забота хоста)
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreText {
    pub text: String,
}

/// Event: счёт изменился
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub total: u32,
}

pub fn format_score(total: u32) -> String {
    format!("Score: {}", total)
}

/// Ставит Scoreboard, если его ещё нет. Возвращает false, если уже был.
pub fn install_scoreboard(world: &mut World, initial: Scoreboard) -> bool {
    if world.contains_resource::<Scoreboard>() {
        crate::log_warning("Scoreboard уже установлен - оставляем первый экземпляр");
        return false;
    }

    world.insert_resource(initial);
    true
}

/// Единственный путь изменить счёт из систем: add + republish
#[derive(SystemParam)]
pub struct ScoreWriter<'w> {
    scoreboard: ResMut<'w, Scoreboard>,
    text: ResMut<'w, ScoreText>,
    changed_events: EventWriter<'w, ScoreChanged>,
}

impl ScoreWriter<'_> {
    pub fn total(&self) -> u32 {
        self.scoreboard.total()
    }

    /// Начисляет очки и публикует новый total (event на каждое изменение)
    pub fn add(&mut self, points: u32) -> u32 {
        let before = self.scoreboard.total();
        let total = self.scoreboard.add(points);

        // Насыщение: total не изменился - публиковать нечего
        if total != before {
            self.text.text = format_score(total);
            self.changed_events.write(ScoreChanged { total });
        }

        total
    }
}

/// Startup: начальное значение (label не пустой со старта)
pub fn publish_initial_score(scoreboard: Res<Scoreboard>, mut changed_events: EventWriter<ScoreChanged>) {
    changed_events.write(ScoreChanged {
        total: scoreboard.total(),
    });
}

/// Score plugin
///
/// `is_unique = false`: повторное добавление не паникует, а проходит
/// через install_scoreboard (first wins).
#[derive(Default)]
pub struct ScorePlugin {
    pub initial: Scoreboard,
}

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        if !install_scoreboard(app.world_mut(), self.initial) {
            return;
        }

        app.insert_resource(ScoreText {
            text: format_score(self.initial.total()),
        })
        .add_event::<ScoreChanged>()
        .add_systems(Startup, publish_initial_score);
    }

    fn is_unique(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn score_world(initial: Scoreboard) -> World {
        let mut world = World::new();
        world.insert_resource(initial);
        world.insert_resource(ScoreText::default());
        world.init_resource::<Events<ScoreChanged>>();
        world
    }

    fn published(world: &World) -> Vec<u32> {
        world
            .resource::<Events<ScoreChanged>>()
            .iter_current_update_events()
            .map(|event| event.total)
            .collect()
    }

    #[test]
    fn test_add_and_format() {
        let mut scoreboard = Scoreboard::default();
        assert_eq!(scoreboard.add(ENEMY_HIT_SCORE), 1);
        assert_eq!(scoreboard.add(ENEMY_HIT_SCORE), 2);

        assert_eq!(scoreboard.total(), 2);
        assert_eq!(format_score(scoreboard.total()), "Score: 2");
    }

    #[test]
    fn test_add_saturates() {
        let mut scoreboard = Scoreboard::with_total(u32::MAX);
        assert_eq!(scoreboard.add(1), u32::MAX);
    }

    #[test]
    fn test_scoreboard_round_trip() {
        let json = serde_json::to_string(&Scoreboard::with_total(17)).unwrap();
        assert_eq!(json, r#"{"total":17}"#);

        let restored: Scoreboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.total(), 17);
    }

    #[test]
    fn test_first_install_wins() {
        let mut world = World::new();

        assert!(install_scoreboard(&mut world, Scoreboard::with_total(5)));
        assert!(!install_scoreboard(&mut world, Scoreboard::with_total(100)));

        assert_eq!(world.resource::<Scoreboard>().total(), 5);
    }

    #[test]
    fn test_writer_publishes_every_change() {
        let mut world = score_world(Scoreboard::default());

        fn two_hits(mut score: ScoreWriter) {
            score.add(ENEMY_HIT_SCORE);
            score.add(ENEMY_HIT_SCORE);
        }
        world.run_system_once(two_hits).unwrap();

        assert_eq!(published(&world), vec![1, 2]);
        assert_eq!(world.resource::<ScoreText>().text, "Score: 2");
    }

    #[test]
    fn test_writer_saturated_add_is_silent() {
        let mut world = score_world(Scoreboard::with_total(u32::MAX));

        fn one_more(mut score: ScoreWriter) {
            assert_eq!(score.add(1), u32::MAX);
        }
        world.run_system_once(one_more).unwrap();

        assert!(published(&world).is_empty());
    }
}
