use chrono::{DateTime, Utc};
use uuid::Uuid;

use models::AuthRecord;
use schema::session;

/// Ephemeral login credential. Sessions are invalidated, never
/// transferred, when their auth record is retired.
#[derive(Associations, Identifiable, Queryable, Debug)]
#[belongs_to(AuthRecord)]
#[table_name = "session"]
pub struct Session {
    pub id: Uuid,
    pub auth_record_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "session"]
pub struct NewSession {
    pub id: Uuid,
    pub auth_record_id: Uuid,
}
