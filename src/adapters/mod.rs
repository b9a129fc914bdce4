// Adapters layer: concrete implementations of the domain ports. Real
// integrations (recommendation, reservation providers) plug in here later;
// until then the unwired placeholders hold their seats.

pub mod memory;
pub mod unwired;
