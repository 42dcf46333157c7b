use chrono::{DateTime, Utc};
use futures::future::{self, Future};

use actors::db;
use models::MergeCode;
use rpc;

#[derive(Debug, Deserialize)]
pub struct Request {}

#[derive(Debug, Serialize)]
pub struct Response {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl From<MergeCode> for Response {
    fn from(code: MergeCode) -> Self {
        Response {
            code: code.code,
            expires_at: code.expires_at,
        }
    }
}

pub fn call(meta: rpc::Meta, _req: Request) -> impl Future<Item = Response, Error = rpc::Error> {
    let subject = rpc::forbid_anonymous(meta.subject);

    future::result(subject).and_then({
        let db = meta.db.unwrap();
        move |subject_id| {
            let msg = db::merge_code::insert::Insert {
                account_id: subject_id,
            };

            db.send(msg).from_err().and_then(move |res| {
                // The code itself stays out of the logs.
                debug!("merge code issued for account {}", subject_id);
                Ok(Response::from(res?))
            })
        }
    })
}
