//! Explicit expiry sweep.
//!
//! Expiry is pull-based: every reading operation flips past-due pending
//! reservations on its way in. This sweep does the same thing on demand,
//! for operators who want the stored statuses caught up without waiting
//! for the next read.

use chrono::{DateTime, Utc};

use crate::database::Database;
use crate::error::Result;

/// Result of an expiry sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpireResult {
    /// Number of pending reservations flipped to expired.
    pub expired_count: usize,
}

/// Expires every pending reservation past its deadline.
///
/// # Errors
///
/// Returns an error if the database update fails.
///
/// # Examples
///
/// ```no_run
/// use chrono::Utc;
/// use roomlet::database::{Database, DatabaseConfig};
/// use roomlet::operations::expire_reservations;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/roomlet.db")).unwrap();
/// let result = expire_reservations(&mut db, Utc::now()).unwrap();
/// println!("expired {} reservations", result.expired_count);
/// ```
pub fn expire_reservations(db: &mut Database, now: DateTime<Utc>) -> Result<ExpireResult> {
    let tx = db.begin_transaction()?;
    let expired_count = Database::expire_due_pending(&tx, now)?;
    tx.commit()?;

    if expired_count > 0 {
        log::debug!("expired {expired_count} pending reservations");
    }

    Ok(ExpireResult { expired_count })
}
