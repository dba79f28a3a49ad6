use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::render::{self, Printable};

/// Physical storage technology of a [`Disk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Ssd,
    Magnetic,
}

impl StorageType {
    /// Label shown in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            StorageType::Ssd => "SSD",
            StorageType::Magnetic => "HDD",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown storage type: {0}")]
pub struct ParseStorageTypeError(pub String);

impl FromStr for StorageType {
    type Err = ParseStorageTypeError;

    /// Accepts `ssd`, `hdd` and `magnetic`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssd" => Ok(StorageType::Ssd),
            "hdd" | "magnetic" => Ok(StorageType::Magnetic),
            other => Err(ParseStorageTypeError(other.to_string())),
        }
    }
}

/// One row of a disk's partition table.
///
/// Partitions are not free-standing tree nodes; the owning disk renders
/// them under a zero-based index label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub size_gib: u64,
    pub name: String,
}

/// Fixed storage with an ordered partition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    pub storage: StorageType,
    pub capacity_gib: u64,
    partitions: Vec<Partition>,
}

impl Disk {
    pub fn new(storage: StorageType, capacity_gib: u64) -> Self {
        Self {
            storage,
            capacity_gib,
            partitions: Vec::new(),
        }
    }

    /// Appends a partition; insertion order is display order and decides
    /// the index labels.
    pub fn add_partition(mut self, size_gib: u64, name: impl Into<String>) -> Self {
        self.partitions.push(Partition {
            size_gib,
            name: name.into(),
        });
        self
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl Printable for Disk {
    /// One line for the disk itself, then its partition rows as a
    /// sub-tree under the widened prefix.
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}{}, {} GiB",
            render::connector(is_last),
            self.storage.label(),
            self.capacity_gib
        )?;

        let row_prefix: String = render::child_prefix(prefix, is_last);
        let count: usize = self.partitions.len();
        for (idx, partition) in self.partitions.iter().enumerate() {
            writeln!(
                out,
                "{row_prefix}{}[{idx}]: {} GiB, {}",
                render::connector(idx + 1 == count),
                partition.size_gib,
                partition.name
            )?;
        }
        Ok(())
    }
}
