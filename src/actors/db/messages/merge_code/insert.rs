use actix::prelude::*;
use chrono::{Duration, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{self, prelude::*};
use ring::rand::SystemRandom;
use uuid::Uuid;

use actors::DbExecutor;
use models::merge_code::generate_code;
use models::{MergeCode, NewMergeCode};
use rpc::error::{Error, Result};

/// Uniqueness lives in the primary key on `code`; a collision on
/// insert is retried with a fresh draw rather than silently ignored.
const MAX_ATTEMPTS: u8 = 5;

#[derive(Debug)]
pub struct Insert {
    pub account_id: Uuid,
}

impl Message for Insert {
    type Result = Result<MergeCode>;
}

impl Handler<Insert> for DbExecutor {
    type Result = Result<MergeCode>;

    fn handle(&mut self, msg: Insert, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get().expect("Failed to get a connection from pool");
        insert_code(conn, msg.account_id)
    }
}

pub fn insert_code(conn: &PgConnection, account_id: Uuid) -> Result<MergeCode> {
    use schema::merge_code;

    let rng = SystemRandom::new();
    let expires_in = {
        let settings = get_settings!();
        settings.merge_codes.expires_in
    };

    let mut attempt = 0;
    loop {
        let changeset = NewMergeCode {
            code: generate_code(&rng).map_err(|_| Error::Internal)?,
            account_id,
            expires_at: Utc::now() + Duration::seconds(expires_in),
        };

        match diesel::insert_into(merge_code::table)
            .values(&changeset)
            .get_result(conn)
        {
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _))
                if attempt + 1 < MAX_ATTEMPTS =>
            {
                attempt += 1;
                debug!("merge code collision, retrying (attempt {})", attempt);
            }
            res => return res.map_err(Error::Db),
        }
    }
}
