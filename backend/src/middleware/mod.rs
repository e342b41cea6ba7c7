//! Actix middleware: request gating and trace correlation.

pub mod gate;
pub mod trace;

pub use gate::AccessGate;
pub use trace::Trace;
