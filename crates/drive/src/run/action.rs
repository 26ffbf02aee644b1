/// Control actions an observer can return from [`run`](fn@crate::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop stepping and return what has been simulated so far.
    StopEarly,
}
