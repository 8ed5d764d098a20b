//! Controller layer: worker events, page state and command orchestration.

pub mod events;
pub mod orchestration;
pub mod page;
