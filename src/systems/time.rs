//! ゲーム内時計
//!
//! 自動フル再計算の時間間隔と再計算タイムスタンプの基準になる。

use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct GameTime {
    pub seconds: f64,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl GameTime {
    /// セッション開始からの累計ゲーム内時間 (時間単位)
    pub fn total_hours(&self) -> f64 {
        self.seconds / 3600.0
    }
}

pub fn game_time_system(time: Res<Time>, mut game_time: ResMut<GameTime>) {
    game_time.seconds += time.delta_secs() as f64;

    let total_mins = (game_time.seconds / 60.0) as u32;
    game_time.minute = total_mins % 60;

    let total_hours = total_mins / 60;
    game_time.hour = total_hours % 24;

    game_time.day = (total_hours / 24) + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_hours_tracks_seconds() {
        let clock = GameTime {
            seconds: 3600.0 * 2.5,
            ..Default::default()
        };
        assert!((clock.total_hours() - 2.5).abs() < f64::EPSILON);
    }
}
