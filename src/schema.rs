table! {
    account (id) {
        id -> Uuid,
        handle -> Text,
        created_at -> Timestamptz,
    }
}

table! {
    auth_record (id) {
        id -> Uuid,
        account_id -> Uuid,
        created_at -> Timestamptz,
    }
}

table! {
    auth_identity (provider, uid) {
        provider -> Text,
        uid -> Text,
        auth_record_id -> Uuid,
        created_at -> Timestamptz,
    }
}

table! {
    session (id) {
        id -> Uuid,
        auth_record_id -> Uuid,
        created_at -> Timestamptz,
    }
}

table! {
    task (id) {
        id -> Uuid,
        account_id -> Uuid,
        description -> Text,
        is_done -> Bool,
        created_at -> Timestamptz,
    }
}

table! {
    merge_code (code) {
        code -> Text,
        account_id -> Uuid,
        expires_at -> Timestamptz,
        used -> Bool,
        used_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

joinable!(auth_record -> account (account_id));
joinable!(auth_identity -> auth_record (auth_record_id));
joinable!(session -> auth_record (auth_record_id));
joinable!(task -> account (account_id));
joinable!(merge_code -> account (account_id));

allow_tables_to_appear_in_same_query!(
    account,
    auth_record,
    auth_identity,
    session,
    task,
    merge_code,
);
