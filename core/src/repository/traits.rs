use crate::store::ActivityStore;
use anyhow::Result;

/// Where the raw activity mapping comes from at process start.
pub trait ActivitySource {
    fn load(&self) -> Result<ActivityStore>;
}
