//! Gets the current game state from the controller and converts it to JSON.

use log::{error, info};

use crate::controller::GameSnapshot;

/// スナップショットを JSON 文字列にして返します。
/// (MatchGridApp::state_json から呼ばれる)
pub fn snapshot_json(snapshot: &GameSnapshot) -> Result<String, serde_json::Error> {
    match serde_json::to_string(snapshot) {
        Ok(json) => {
            info!(
                "Serialized game state ({:?}, {} card(s)).",
                snapshot.phase,
                snapshot.session.as_ref().map_or(0, |s| s.cards.len())
            );
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize game state: {}", e);
            Err(e)
        }
    }
}
