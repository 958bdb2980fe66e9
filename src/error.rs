#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("requested {requested} active drops but capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
