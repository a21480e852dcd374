//! Customer entity whose state transitions are published as domain events
//! through a synchronous, in-process dispatcher.

pub mod domain;
pub mod event_dispatch;
