use serde::{Deserialize, Serialize};

use crate::accounts::repo::Account;

/// Request body for account creation.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub password: String,
}

/// Public projection of an account: the only fields any read returns.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub email: String,
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
        }
    }
}

/// Empty success acknowledgment. Serializes to `{}` on the wire; write
/// operations deliberately return no identifying fields.
#[derive(Debug, Serialize)]
pub struct Ack {}
