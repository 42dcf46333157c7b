use actix::prelude::*;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use actors::DbExecutor;
use models::merge_code::CodeState;
use models::MergeCode;
use rpc::error::{Error, Result};

#[derive(Debug)]
pub struct Validate {
    pub code: String,
    pub consumer_id: Uuid,
}

#[derive(Debug)]
pub struct Validation {
    pub valid: bool,
    pub source_account_id: Option<Uuid>,
}

impl Message for Validate {
    type Result = Result<Validation>;
}

impl Handler<Validate> for DbExecutor {
    type Result = Result<Validation>;

    fn handle(&mut self, msg: Validate, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get().expect("Failed to get a connection from pool");
        call(conn, &msg)
    }
}

pub fn call(conn: &PgConnection, msg: &Validate) -> Result<Validation> {
    match check_code(conn, &msg.code, msg.consumer_id, false)? {
        Check::Approved(code) => Ok(Validation {
            valid: true,
            source_account_id: Some(code.account_id),
        }),
        Check::Rejected => Ok(Validation {
            valid: false,
            source_account_id: None,
        }),
    }
}

#[derive(Debug)]
pub enum Check {
    /// Unknown, spent or expired code. A soft outcome the caller may
    /// retry with another code.
    Rejected,
    Approved(MergeCode),
}

/// The single decision point for code consumption, shared by the
/// validate operation and the merge transaction. `lock` takes a row
/// lock so the verdict stays authoritative until commit.
pub fn check_code(conn: &PgConnection, value: &str, consumer_id: Uuid, lock: bool) -> Result<Check> {
    use schema::merge_code::dsl::merge_code;

    let found: Option<MergeCode> = if lock {
        merge_code.find(value).for_update().first(conn).optional()?
    } else {
        merge_code.find(value).first(conn).optional()?
    };

    let code = match found {
        Some(code) => code,
        None => return Ok(Check::Rejected),
    };

    match code.state(consumer_id, Utc::now()) {
        CodeState::Spent | CodeState::Expired => Ok(Check::Rejected),
        CodeState::SelfTarget => Err(Error::InvalidOperation(
            "Cannot merge account with itself".to_owned(),
        )),
        CodeState::Consumable => Ok(Check::Approved(code)),
    }
}
