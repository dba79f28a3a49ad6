//! # Inventory Object Model
//!
//! The node kinds that make up an inventory tree, leaves first:
//! addresses, hardware components (with the disk's inline partition
//! table), hosts, and the network root.

pub mod address;
pub mod component;
pub mod computer;
pub mod disk;
pub mod network;
