// Rail graph and hub types
pub mod types;
pub use types::{HubNode, RailroadNetwork};

// Graph construction and incremental registration
pub mod network;
pub use network::{add_depot, add_port, add_railroad, initialize_railroad_networks};

// Hub activation (Logic Layer)
pub mod connectivity;
pub use connectivity::{compute_connectivity, reachable_from, served_tiles};

// Capacity purchase ledger
pub mod capacity;
pub use capacity::{
    apply_pending_capacity, purchase_transport_capacity, try_purchase_transport_capacity,
};

#[cfg(test)]
mod tests;
