use actix::Addr;
use jsonrpc::{MetaIoHandler, Metadata};
use uuid::Uuid;

use actors::DbExecutor;
use rpc::account::Rpc as AccountRpc;
use rpc::merge_code::Rpc as MergeCodeRpc;
use rpc::ping::Rpc as PingRpc;

pub mod account;
pub mod error;
pub mod merge_code;
mod ping;

pub use self::error::Error;

#[derive(Clone, Default)]
#[allow(missing_debug_implementations)]
pub struct Meta {
    pub db: Option<Addr<DbExecutor>>,
    pub subject: Option<Uuid>,
}

impl Metadata for Meta {}

pub type Server = MetaIoHandler<Meta>;

pub fn build_server() -> Server {
    let mut io = MetaIoHandler::default();

    let rpc = ping::RpcImpl {};
    io.extend_with(rpc.to_delegate());

    let rpc = account::RpcImpl {};
    io.extend_with(rpc.to_delegate());

    let rpc = merge_code::RpcImpl {};
    io.extend_with(rpc.to_delegate());

    io
}

pub fn forbid_anonymous(subject: Option<Uuid>) -> error::Result<Uuid> {
    subject.ok_or(error::Error::Unauthenticated)
}
