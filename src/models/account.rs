use chrono::{DateTime, Utc};
use uuid::Uuid;

use schema::account;

#[derive(Identifiable, Queryable, Debug)]
#[table_name = "account"]
pub struct Account {
    pub id: Uuid,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "account"]
pub struct NewAccount {
    pub id: Uuid,
    pub handle: String,
}
