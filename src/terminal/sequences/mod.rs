//! Escape-sequence handlers, split by sequence family.

pub(crate) mod csi;
pub(crate) mod esc;
pub(crate) mod osc;
