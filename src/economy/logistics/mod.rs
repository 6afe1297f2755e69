//! Moving goods from the field into national stores.

pub mod allocation;
pub mod collection;
pub mod plan;
pub mod system;

pub use allocation::{choose_allocation, clamp_plan};
pub use collection::{compute_logistics_transport, logistics_hubs};
pub use plan::{AllocationPlan, TransportAllocations};
pub use system::{
    LogisticsReport, logistics_system, set_transport_allocations, try_set_transport_allocations,
};

#[cfg(test)]
mod tests;
