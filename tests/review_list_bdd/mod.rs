//! Support modules for review list BDD tests.

pub(crate) mod state;

pub(crate) use state::ReviewListState;
