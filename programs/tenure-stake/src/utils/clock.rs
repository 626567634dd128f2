use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Current cluster time as unsigned seconds.
///
/// The Clock sysvar reports `i64`; a negative value cannot occur on a live
/// cluster but the conversion is still checked rather than cast.
pub fn unix_now() -> Result<u64> {
    let ts = Clock::get()?.unix_timestamp;
    u64::try_from(ts).map_err(|_| error!(ErrorCode::InvalidTimestamp))
}
