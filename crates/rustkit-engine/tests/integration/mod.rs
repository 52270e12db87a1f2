//! Integration test modules.

mod failures;
mod page_rendering;
mod z_order;
