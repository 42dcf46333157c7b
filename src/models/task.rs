use chrono::{DateTime, Utc};
use uuid::Uuid;

use models::Account;
use schema::task;

#[derive(Associations, Identifiable, Queryable, Debug)]
#[belongs_to(Account)]
#[table_name = "task"]
pub struct Task {
    pub id: Uuid,
    pub account_id: Uuid,
    pub description: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "task"]
pub struct NewTask {
    pub id: Uuid,
    pub account_id: Uuid,
    pub description: String,
}
