use chrono::{DateTime, Utc};
use uuid::Uuid;

use models::AuthRecord;
use schema::auth_identity;

/// A single provider-bound login method, e.g. ("google", <subject id>).
/// At most one identity per provider may hang off one auth record.
#[derive(Associations, Identifiable, Queryable, Debug)]
#[belongs_to(AuthRecord)]
#[primary_key(provider, uid)]
#[table_name = "auth_identity"]
pub struct AuthIdentity {
    pub provider: String,
    pub uid: String,
    pub auth_record_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "auth_identity"]
pub struct NewAuthIdentity {
    pub provider: String,
    pub uid: String,
    pub auth_record_id: Uuid,
}
