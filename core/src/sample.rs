//! Canned demo inventory shared by the command line and the scenario
//! tests.

use crate::inventory::component::{Cpu, Memory};
use crate::inventory::computer::Computer;
use crate::inventory::disk::{Disk, StorageType};
use crate::inventory::network::Network;

/// A two-host network: a small application server and a storage box
/// with a partitioned spinning disk.
pub fn network() -> Network {
    Network::new("MISIS network")
        .add_computer(
            Computer::new("server1.misis.ru")
                .add_address("192.168.1.1")
                .add_component(Cpu::new(4, 2500))
                .add_component(Memory::new(16000)),
        )
        .add_computer(
            Computer::new("server2.misis.ru")
                .add_address("10.0.0.1")
                .add_component(Cpu::new(8, 3200))
                .add_component(
                    Disk::new(StorageType::Magnetic, 2000)
                        .add_partition(500, "system")
                        .add_partition(1500, "data"),
                ),
        )
}
