//! Support modules for footer BDD tests.

pub(crate) mod state;

pub(crate) use state::FooterState;
