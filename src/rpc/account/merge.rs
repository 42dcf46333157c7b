use futures::future::{self, Future};

use actors::db;
use rpc;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
}

pub fn call(meta: rpc::Meta, req: Request) -> impl Future<Item = Response, Error = rpc::Error> {
    let subject = rpc::forbid_anonymous(meta.subject);

    future::result(subject).and_then({
        let db = meta.db.unwrap();
        move |subject_id| {
            let msg = db::merge::Merge {
                // Codes are stored uppercase; accept any case on input.
                code: req.code.trim().to_uppercase(),
                consumer_id: subject_id,
            };

            db.send(msg).from_err().and_then(|res| {
                let merged = res?;
                debug!("account merge res: {:?}", merged);

                Ok(Response {
                    success: true,
                    message: "Accounts successfully merged! You can now log in with any \
                              authentication method from either account."
                        .to_owned(),
                })
            })
        }
    })
}
