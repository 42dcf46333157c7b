use futures::future::{self, Future};
use uuid::Uuid;

use actors::db;
use rpc;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_account_id: Option<Uuid>,
}

impl From<db::merge_code::validate::Validation> for Response {
    fn from(validation: db::merge_code::validate::Validation) -> Self {
        Response {
            valid: validation.valid,
            source_account_id: validation.source_account_id,
        }
    }
}

pub fn call(meta: rpc::Meta, req: Request) -> impl Future<Item = Response, Error = rpc::Error> {
    let subject = rpc::forbid_anonymous(meta.subject);

    future::result(subject).and_then({
        let db = meta.db.unwrap();
        move |subject_id| {
            let msg = db::merge_code::validate::Validate {
                code: req.code.trim().to_uppercase(),
                consumer_id: subject_id,
            };

            db.send(msg).from_err().and_then(|res| {
                debug!("merge code validate res: {:?}", res);
                Ok(Response::from(res?))
            })
        }
    })
}
