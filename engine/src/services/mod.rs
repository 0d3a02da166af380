//! Service layer for the bedtime computation.
//!
//! This module sits between the domain types and the callers that own the
//! user's inputs. The presentation layer invokes [`bedtime::compute_bedtime`]
//! whenever the user requests a recommendation.

pub mod bedtime;


pub use bedtime::{compute_bedtime, Bedtime, BedtimeError};
