use chrono::{DateTime, Utc};
use uuid::Uuid;

use models::Account;
use schema::auth_record;

#[derive(Associations, Identifiable, Queryable, Debug)]
#[belongs_to(Account)]
#[table_name = "auth_record"]
pub struct AuthRecord {
    pub id: Uuid,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "auth_record"]
pub struct NewAuthRecord {
    pub id: Uuid,
    pub account_id: Uuid,
}
