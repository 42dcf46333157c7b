use chrono::naive::serde::ts_seconds;
use chrono::{NaiveDateTime, Utc};
use frank_jwt;
use serde_json;
use uuid::Uuid;

use std::fmt;

const ISSUER: &str = "taskboard.services";

#[derive(Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    pub iss: String,
    #[serde(with = "ts_seconds")]
    pub exp: NaiveDateTime,
    #[serde(with = "ts_seconds")]
    pub iat: NaiveDateTime,
    pub sub: Uuid,
}

impl AccessToken {
    pub fn new(expires_in: u32, sub: Uuid) -> Self {
        let now = Utc::now().timestamp();

        AccessToken {
            iss: ISSUER.to_owned(),
            exp: NaiveDateTime::from_timestamp(now + i64::from(expires_in), 0),
            iat: NaiveDateTime::from_timestamp(now, 0),
            sub,
        }
    }

    pub fn decode(token: &str) -> Result<AccessToken, DecodeError> {
        let settings = get_settings!();
        let secret = settings.authentication.secret.clone();

        if let Ok((_header, payload)) =
            frank_jwt::decode(&token.to_owned(), &secret, frank_jwt::Algorithm::HS256)
        {
            serde_json::from_value(payload).map_err(|_| DecodeError::InvalidPayload)
        } else {
            Err(DecodeError::InvalidSignature)
        }
    }

    pub fn encode(payload: AccessToken) -> Result<String, EncodeError> {
        let settings = get_settings!();

        frank_jwt::encode(
            json!({}),
            &settings.authentication.secret,
            &serde_json::to_value(payload).map_err(|_| EncodeError)?,
            frank_jwt::Algorithm::HS256,
        ).map_err(|_| EncodeError)
    }

    pub fn default_expires_in() -> u16 {
        let settings = get_settings!();
        settings.tokens.expires_in
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "AccessToken {{ iss: {}, exp: {}, iat: {}, sub: {} }}",
            self.iss, self.exp, self.iat, self.sub
        )
    }
}

#[derive(Debug, Fail, PartialEq)]
pub enum DecodeError {
    #[fail(display = "Invalid signature")]
    InvalidSignature,

    #[fail(display = "Invalid payload")]
    InvalidPayload,
}

#[derive(Debug)]
pub struct EncodeError;

#[derive(Debug)]
pub struct Validator {
    pub exp: NaiveDateTime,
}

impl Validator {
    pub fn call(&self, token: &AccessToken) -> bool {
        self.exp < token.exp
    }
}

impl Default for Validator {
    fn default() -> Self {
        let now = Utc::now();

        Validator {
            exp: NaiveDateTime::from_timestamp(now.timestamp(), 0),
        }
    }
}
