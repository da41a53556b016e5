// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// コントローラーがいまどのフェーズにいるかを表すよ！🏁
///
/// 「終了」は一瞬で `Configuring` に戻るので、フェーズとしては持たない。
/// どう終わったかは [`GameOutcome`] に残すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// まだ画面に接続されていない
    Idle,
    /// 設定フォームが見えていて、セッションは無い
    Configuring,
    /// プレイ中！ タイマーが動いている
    Playing,
}

/// How the most recent session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// 全部そろえた！🏆
    Won,
    /// 時間切れ
    TimedOut,
    /// ストップボタンで止めた (またはリスタート)
    Stopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_round_trips_through_json() {
        let json = serde_json::to_string(&GamePhase::Playing).expect("serialize phase");
        assert_eq!(json, "\"Playing\"");
        let back: GamePhase = serde_json::from_str(&json).expect("deserialize phase");
        assert_eq!(back, GamePhase::Playing);
    }

    #[test]
    fn outcomes_are_distinct() {
        assert_ne!(GameOutcome::Won, GameOutcome::TimedOut);
        assert_ne!(GameOutcome::TimedOut, GameOutcome::Stopped);
    }
}
