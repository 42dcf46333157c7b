use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use diesel::{self, PgConnection};
use uuid::Uuid;

use taskboard::models::*;
use taskboard::schema;

pub fn create_account(conn: &PgConnection, handle: &str) -> Account {
    let account = NewAccount {
        id: Uuid::new_v4(),
        handle: handle.to_owned(),
    };

    diesel::insert_into(schema::account::table)
        .values(account)
        .get_result(conn)
        .unwrap()
}

pub fn create_account_at(
    conn: &PgConnection,
    id: Uuid,
    handle: &str,
    created_at: DateTime<Utc>,
) -> Account {
    use taskboard::schema::account::dsl;

    diesel::insert_into(schema::account::table)
        .values((
            dsl::id.eq(id),
            dsl::handle.eq(handle),
            dsl::created_at.eq(created_at),
        ))
        .get_result(conn)
        .unwrap()
}

pub fn create_auth_record(conn: &PgConnection, account_id: Uuid) -> AuthRecord {
    let record = NewAuthRecord {
        id: Uuid::new_v4(),
        account_id,
    };

    diesel::insert_into(schema::auth_record::table)
        .values(record)
        .get_result(conn)
        .unwrap()
}

pub fn create_identity(
    conn: &PgConnection,
    auth_record_id: Uuid,
    provider: &str,
    uid: &str,
) -> AuthIdentity {
    let identity = NewAuthIdentity {
        provider: provider.to_owned(),
        uid: uid.to_owned(),
        auth_record_id,
    };

    diesel::insert_into(schema::auth_identity::table)
        .values(identity)
        .get_result(conn)
        .unwrap()
}

pub fn create_session(conn: &PgConnection, auth_record_id: Uuid) -> Session {
    let session = NewSession {
        id: Uuid::new_v4(),
        auth_record_id,
    };

    diesel::insert_into(schema::session::table)
        .values(session)
        .get_result(conn)
        .unwrap()
}

pub fn create_task(conn: &PgConnection, account_id: Uuid, description: &str) -> Task {
    let task = NewTask {
        id: Uuid::new_v4(),
        account_id,
        description: description.to_owned(),
    };

    diesel::insert_into(schema::task::table)
        .values(task)
        .get_result(conn)
        .unwrap()
}

pub fn create_merge_code(
    conn: &PgConnection,
    account_id: Uuid,
    code: &str,
    expires_in: i64,
) -> MergeCode {
    let code = NewMergeCode {
        code: code.to_owned(),
        account_id,
        expires_at: Utc::now() + Duration::seconds(expires_in),
    };

    diesel::insert_into(schema::merge_code::table)
        .values(code)
        .get_result(conn)
        .unwrap()
}

pub fn create_used_merge_code(conn: &PgConnection, account_id: Uuid, code: &str) -> MergeCode {
    use taskboard::schema::merge_code::dsl;

    diesel::insert_into(schema::merge_code::table)
        .values((
            dsl::code.eq(code),
            dsl::account_id.eq(account_id),
            dsl::expires_at.eq(Utc::now() + Duration::hours(1)),
            dsl::used.eq(true),
            dsl::used_at.eq(Utc::now()),
        ))
        .get_result(conn)
        .unwrap()
}
