use futures::Future;
use jsonrpc::BoxFuture;

use rpc;

mod merge;
mod read;

build_rpc_trait! {
    pub trait Rpc {
        type Metadata;

        #[rpc(meta, name = "account.read")]
        fn read(&self, Self::Metadata, read::Request) -> BoxFuture<read::Response>;

        #[rpc(meta, name = "account.merge")]
        fn merge(&self, Self::Metadata, merge::Request) -> BoxFuture<merge::Response>;
    }
}

#[allow(missing_debug_implementations)]
pub struct RpcImpl;

impl Rpc for RpcImpl {
    type Metadata = rpc::Meta;

    fn read(&self, meta: rpc::Meta, req: read::Request) -> BoxFuture<read::Response> {
        Box::new(read::call(meta, req).from_err())
    }

    fn merge(&self, meta: rpc::Meta, req: merge::Request) -> BoxFuture<merge::Response> {
        Box::new(merge::call(meta, req).from_err())
    }
}
