pub(crate) mod hits;
pub(crate) mod status;

pub(crate) use hits::HitMap;
pub(crate) use status::{StatusKind, StatusMessage};
