/// All primary keys are opaque UUIDs (time-ordered v7 for new rows).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a new primary key.
///
/// v7 ids sort by creation time, which gives note listings a meaningful
/// tie-breaker when two rows share a `created_at`.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
