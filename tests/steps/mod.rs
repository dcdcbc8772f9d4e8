//! Step definitions, grouped by feature area.

mod common_steps;
mod order_steps;
