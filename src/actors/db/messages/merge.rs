use actix::prelude::*;
use chrono::Utc;
use diesel::{self, prelude::*};
use uuid::Uuid;

use std::collections::HashSet;

use actors::db::messages::merge_code::validate::{check_code, Check};
use actors::DbExecutor;
use models::{AuthIdentity, AuthRecord, MergeCode};
use rpc::error::{Error, Result};

#[derive(Debug)]
pub struct Merge {
    pub code: String,
    pub consumer_id: Uuid,
}

#[derive(Debug)]
pub struct Merged {
    pub source_account_id: Uuid,
    pub tasks_moved: usize,
    pub identities_moved: usize,
}

impl Message for Merge {
    type Result = Result<Merged>;
}

impl Handler<Merge> for DbExecutor {
    type Result = Result<Merged>;

    fn handle(&mut self, msg: Merge, _ctx: &mut Self::Context) -> Self::Result {
        let conn = &self.0.get().expect("Failed to get a connection from pool");
        call(conn, &msg)
    }
}

/// Consolidates the code's generating account into the consuming one.
/// Every step shares one transaction: a failure anywhere, including
/// the provider-conflict check, leaves both accounts untouched.
pub fn call(conn: &PgConnection, msg: &Merge) -> Result<Merged> {
    conn.transaction::<_, Error, _>(|| {
        // Re-checked here, under a row lock, rather than trusting an
        // earlier validate round trip.
        let code = match check_code(conn, &msg.code, msg.consumer_id, true)? {
            Check::Approved(code) => code,
            Check::Rejected => {
                return Err(Error::InvalidOperation(
                    "Invalid or expired merge code".to_owned(),
                ))
            }
        };

        let source_account_id = code.account_id;

        consume_code(conn, &code)?;

        let tasks_moved = reassign_tasks(conn, source_account_id, msg.consumer_id)?;

        let source_record = auth_record_of(conn, source_account_id)?;
        let target_record = auth_record_of(conn, msg.consumer_id)?;

        let identities_moved = reconcile_identities(conn, &source_record, &target_record)?;

        // Source sessions are revoked, never transferred. The
        // consumer's own session hangs off the target record and
        // stays valid.
        purge_sessions(conn, source_record.id)?;
        diesel::delete(&source_record).execute(conn)?;

        purge_codes(conn, source_account_id)?;
        delete_account(conn, source_account_id)?;

        info!(
            "merged account {} into {}: {} task(s), {} identity(ies)",
            source_account_id, msg.consumer_id, tasks_moved, identities_moved
        );

        Ok(Merged {
            source_account_id,
            tasks_moved,
            identities_moved,
        })
    })
}

fn consume_code(conn: &PgConnection, code: &MergeCode) -> QueryResult<usize> {
    use schema::merge_code::dsl::{used, used_at};

    diesel::update(code)
        .set((used.eq(true), used_at.eq(Utc::now())))
        .execute(conn)
}

fn reassign_tasks(conn: &PgConnection, from: Uuid, to: Uuid) -> QueryResult<usize> {
    use schema::task::dsl::*;

    diesel::update(task.filter(account_id.eq(from)))
        .set(account_id.eq(to))
        .execute(conn)
}

fn auth_record_of(conn: &PgConnection, account: Uuid) -> QueryResult<AuthRecord> {
    use schema::auth_record::dsl::*;

    auth_record
        .filter(account_id.eq(account))
        .for_update()
        .first(conn)
}

/// Moves every source identity onto the target record, or aborts with
/// the colliding provider names. Check and relink run inside the
/// caller's transaction so a concurrent merge cannot slip a
/// conflicting identity in between.
fn reconcile_identities(
    conn: &PgConnection,
    source: &AuthRecord,
    target: &AuthRecord,
) -> Result<usize> {
    use schema::auth_identity::dsl::*;

    let source_identities: Vec<AuthIdentity> = auth_identity
        .filter(auth_record_id.eq(source.id))
        .for_update()
        .load(conn)?;
    let target_identities: Vec<AuthIdentity> = auth_identity
        .filter(auth_record_id.eq(target.id))
        .load(conn)?;

    let collisions = conflicting_providers(&source_identities, &target_identities);
    if !collisions.is_empty() {
        return Err(Error::Conflict(collisions.join(", ")));
    }

    let moved = diesel::update(auth_identity.filter(auth_record_id.eq(source.id)))
        .set(auth_record_id.eq(target.id))
        .execute(conn)?;

    Ok(moved)
}

fn conflicting_providers(source: &[AuthIdentity], target: &[AuthIdentity]) -> Vec<String> {
    let taken: HashSet<&str> = target.iter().map(|i| i.provider.as_str()).collect();

    let mut collisions: Vec<String> = source
        .iter()
        .filter(|i| taken.contains(i.provider.as_str()))
        .map(|i| i.provider.clone())
        .collect();
    collisions.sort();
    collisions.dedup();
    collisions
}

fn purge_sessions(conn: &PgConnection, record_id: Uuid) -> QueryResult<usize> {
    use schema::session::dsl::*;

    diesel::delete(session.filter(auth_record_id.eq(record_id))).execute(conn)
}

fn purge_codes(conn: &PgConnection, account: Uuid) -> QueryResult<usize> {
    use schema::merge_code::dsl::*;

    diesel::delete(merge_code.filter(account_id.eq(account))).execute(conn)
}

fn delete_account(conn: &PgConnection, id: Uuid) -> QueryResult<usize> {
    use schema::account::dsl::account;

    diesel::delete(account.find(id)).execute(conn)
}
