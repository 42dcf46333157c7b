use chrono::{DateTime, Utc};
use futures::Future;
use uuid::Uuid;

use actors::db;
use models::Account;
use rpc;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Uuid,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for Response {
    fn from(account: Account) -> Self {
        Response {
            id: account.id,
            handle: account.handle,
            created_at: account.created_at,
        }
    }
}

pub fn call(meta: rpc::Meta, req: Request) -> impl Future<Item = Response, Error = rpc::Error> {
    let db = meta.db.unwrap();
    let msg = db::account::Find(req.id);

    db.send(msg).from_err().and_then(|res| {
        debug!("account find res: {:?}", res);

        let account = res.map_err(rpc::Error::Db)?;
        Ok(Response::from(account))
    })
}
