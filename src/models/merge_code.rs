use chrono::{DateTime, Utc};
use ring::error::Unspecified;
use ring::rand::SecureRandom;
use uuid::Uuid;

use models::Account;
use schema::merge_code;

pub const CODE_LENGTH: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One-time token authorizing consolidation of its generating account
/// into whichever account later presents it.
#[derive(Associations, Identifiable, Queryable, Debug)]
#[belongs_to(Account)]
#[primary_key(code)]
#[table_name = "merge_code"]
pub struct MergeCode {
    pub code: String,
    pub account_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[table_name = "merge_code"]
pub struct NewMergeCode {
    pub code: String,
    pub account_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum CodeState {
    /// Already consumed by a merge. Checked first: a spent code stays
    /// spent even past its expiry.
    Spent,
    Expired,
    /// Presented by the account that generated it.
    SelfTarget,
    Consumable,
}

impl MergeCode {
    pub fn state(&self, consumer_id: Uuid, now: DateTime<Utc>) -> CodeState {
        if self.used {
            CodeState::Spent
        } else if self.expires_at <= now {
            CodeState::Expired
        } else if self.account_id == consumer_id {
            CodeState::SelfTarget
        } else {
            CodeState::Consumable
        }
    }
}

/// Draws a fresh 8-character code from the uppercase-alphanumeric
/// alphabet. Uniqueness is enforced by the primary key on `code`,
/// not by entropy; the caller retries on collision.
pub fn generate_code(rng: &SecureRandom) -> Result<String, Unspecified> {
    // Largest multiple of the alphabet size that fits in a byte;
    // bytes above it are rejected to keep the draw uniform.
    const LIMIT: u8 = 252;

    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buf = [0u8; 16];

    while code.len() < CODE_LENGTH {
        rng.fill(&mut buf)?;
        for byte in buf.iter() {
            if *byte < LIMIT && code.len() < CODE_LENGTH {
                code.push(ALPHABET[(*byte % ALPHABET.len() as u8) as usize] as char);
            }
        }
    }

    Ok(code)
}
