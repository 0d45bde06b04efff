use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

/// Check that `caller` is the stored admin. Callers must have already
/// authenticated via `require_auth`.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    let admin = storage::get_admin(e).ok_or(Error::NotInitialized)?;
    if admin != *caller {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}
