use futures::Future;
use jsonrpc::BoxFuture;

use rpc;

mod create;
mod validate;

build_rpc_trait! {
    pub trait Rpc {
        type Metadata;

        #[rpc(meta, name = "merge_code.create")]
        fn create(&self, Self::Metadata, create::Request) -> BoxFuture<create::Response>;

        #[rpc(meta, name = "merge_code.validate")]
        fn validate(&self, Self::Metadata, validate::Request) -> BoxFuture<validate::Response>;
    }
}

#[allow(missing_debug_implementations)]
pub struct RpcImpl;

impl Rpc for RpcImpl {
    type Metadata = rpc::Meta;

    fn create(&self, meta: rpc::Meta, req: create::Request) -> BoxFuture<create::Response> {
        Box::new(create::call(meta, req).from_err())
    }

    fn validate(&self, meta: rpc::Meta, req: validate::Request) -> BoxFuture<validate::Response> {
        Box::new(validate::call(meta, req).from_err())
    }
}
