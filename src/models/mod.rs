mod account;
mod auth_identity;
mod auth_record;
pub mod merge_code;
mod session;
mod task;

pub mod prelude {
    pub use models::account::{Account, NewAccount};
    pub use models::auth_identity::{AuthIdentity, NewAuthIdentity};
    pub use models::auth_record::{AuthRecord, NewAuthRecord};
    pub use models::merge_code::{MergeCode, NewMergeCode};
    pub use models::session::{NewSession, Session};
    pub use models::task::{NewTask, Task};
}

pub use self::prelude::*;
