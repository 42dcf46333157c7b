use actix_web::HttpMessage;
use diesel::prelude::*;
use serde_json;

use taskboard::models::Account;

use shared;
use shared::db::{create_account, create_auth_record, create_merge_code, create_used_merge_code};

const CODE: &str = "AB12CD34";

lazy_static! {
    static ref NOT_VALID: String = {
        let json = r#"{
            "jsonrpc": "2.0",
            "result": {
                "valid": false
            },
            "id": "qwerty"
        }"#;
        shared::strip_json(json)
    };
}

struct Fixture {
    source: Account,
    consumer: Account,
}

#[must_use]
fn before_each(conn: &PgConnection) -> Fixture {
    conn.begin_test_transaction()
        .expect("Failed to begin transaction");

    let source = create_account(conn, "alice.old");
    let _ = create_auth_record(conn, source.id);

    let consumer = create_account(conn, "alice");
    let _ = create_auth_record(conn, consumer.id);

    Fixture { source, consumer }
}

fn build_request(code: &str) -> serde_json::Value {
    json!({
        "jsonrpc": "2.0",
        "method": "merge_code.validate",
        "params": [{
            "code": code,
        }],
        "id": "qwerty",
    })
}

#[test]
fn valid_code_reveals_source_account() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        let fixture = before_each(&conn);
        create_merge_code(&conn, fixture.source.id, CODE, 3600);
        fixture
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request(CODE)).unwrap(),
        fixture.consumer.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();

    let template = r#"{
        "jsonrpc": "2.0",
        "result": {
            "valid": true,
            "source_account_id": "SOURCE_ACCOUNT_ID"
        },
        "id": "qwerty"
    }"#;
    let json = template.replace("SOURCE_ACCOUNT_ID", &fixture.source.id.to_string());
    assert_eq!(body, shared::strip_json(&json));
}

#[test]
fn lowercase_input_is_accepted() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        let fixture = before_each(&conn);
        create_merge_code(&conn, fixture.source.id, CODE, 3600);
        fixture
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request("ab12cd34")).unwrap(),
        fixture.consumer.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();

    let template = r#"{
        "jsonrpc": "2.0",
        "result": {
            "valid": true,
            "source_account_id": "SOURCE_ACCOUNT_ID"
        },
        "id": "qwerty"
    }"#;
    let json = template.replace("SOURCE_ACCOUNT_ID", &fixture.source.id.to_string());
    assert_eq!(body, shared::strip_json(&json));
}

#[test]
fn unknown_code_is_not_valid() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        before_each(&conn)
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request("ZZ99ZZ99")).unwrap(),
        fixture.consumer.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();
    assert_eq!(body, *NOT_VALID);
}

#[test]
fn used_code_is_not_valid() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        let fixture = before_each(&conn);
        create_used_merge_code(&conn, fixture.source.id, CODE);
        fixture
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request(CODE)).unwrap(),
        fixture.consumer.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();
    assert_eq!(body, *NOT_VALID);
}

#[test]
fn expired_code_is_not_valid() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        let fixture = before_each(&conn);
        create_merge_code(&conn, fixture.source.id, CODE, -60);
        fixture
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request(CODE)).unwrap(),
        fixture.consumer.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();
    assert_eq!(body, *NOT_VALID);
}

#[test]
fn own_code_is_an_error_not_a_soft_failure() {
    let shared::Server { mut srv, pool } = shared::build_server();

    let fixture = {
        let conn = get_conn!(pool);
        let fixture = before_each(&conn);
        create_merge_code(&conn, fixture.source.id, CODE, 3600);
        fixture
    };

    let req = shared::build_auth_request(
        &srv,
        serde_json::to_string(&build_request(CODE)).unwrap(),
        fixture.source.id,
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();

    let json = r#"{
        "jsonrpc": "2.0",
        "error": {
            "code": 400,
            "message": "Cannot merge account with itself"
        },
        "id": "qwerty"
    }"#;
    assert_eq!(body, shared::strip_json(json));
}

#[test]
fn anonymous_cannot_validate() {
    let shared::Server { mut srv, pool } = shared::build_server();

    {
        let conn = get_conn!(pool);
        let _ = before_each(&conn);
    }

    let req = shared::build_anonymous_request(
        &srv,
        serde_json::to_string(&build_request(CODE)).unwrap(),
    );
    let resp = srv.execute(req.send()).unwrap();
    let body = srv.execute(resp.body()).unwrap();
    assert_eq!(body, *shared::api::UNAUTHENTICATED);
}
