// backend/src/models/mod.rs

use serde::Serialize;

// ───────────────────────────────────────
// Aggregates
// ───────────────────────────────────────
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_jobs: i64,
    pub urgent_jobs: i64,
    pub new_jobs: i64,
    pub ministries: i64,
}
