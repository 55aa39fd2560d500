use std::fmt::Debug;

/// Release nodes starting from the front of the queue. This is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontToBack;

/// Release nodes starting from the back of the queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BackToFront;

/// Selects the order in which a [`TextQueue`](crate::TextQueue) releases its nodes on teardown.
pub trait DropBehavior: seal_drop_behavior::Sealed + Debug + Copy + Default {}
pub(crate) mod seal_drop_behavior {
    pub trait Sealed {
        const IS_INVERTED: bool;
    }
}

impl DropBehavior for FrontToBack {}
impl DropBehavior for BackToFront {}

impl seal_drop_behavior::Sealed for FrontToBack {
    const IS_INVERTED: bool = false;
}
impl seal_drop_behavior::Sealed for BackToFront {
    const IS_INVERTED: bool = true;
}
