//! # Hardware Components
//!
//! The closed set of component variants a host can carry, and the
//! compact string form the command line accepts for them:
//!
//! * **CPU**: `cpu:<cores>@<mhz>`, e.g. `cpu:4@2500`
//! * **Memory**: `memory:<mib>` or `mem:<mib>`, e.g. `mem:16000`
//! * **Disk**: `disk:<ssd|hdd>:<gib>[:<size>=<name>,...]`,
//!   e.g. `disk:hdd:2000:500=system,1500=data`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::inventory::disk::{Disk, ParseStorageTypeError, StorageType};
use crate::render::{self, Printable};

/// A processor with a core count and clock rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    pub cores: u32,
    pub clock_mhz: u32,
}

impl Cpu {
    pub fn new(cores: u32, clock_mhz: u32) -> Self {
        Self { cores, clock_mhz }
    }
}

impl Printable for Cpu {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}CPU, {} cores @ {}MHz",
            render::connector(is_last),
            self.cores,
            self.clock_mhz
        )
    }
}

/// A memory bank sized in MiB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    pub size_mib: u64,
}

impl Memory {
    pub fn new(size_mib: u64) -> Self {
        Self { size_mib }
    }
}

impl Printable for Memory {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}Memory, {} MiB",
            render::connector(is_last),
            self.size_mib
        )
    }
}

/// A hardware component attached to a host.
///
/// Closed set of variants; each renders a single line except [`Disk`],
/// which renders its partition table as a sub-tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    /// The variant's headline figure: clock MHz for CPUs, MiB for
    /// memory, GiB of capacity for disks.
    pub fn numeric_val(&self) -> u64 {
        match self {
            Component::Cpu(cpu) => u64::from(cpu.clock_mhz),
            Component::Memory(memory) => memory.size_mib,
            Component::Disk(disk) => disk.capacity_gib,
        }
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Component::Disk(disk)
    }
}

impl Printable for Component {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        match self {
            Component::Cpu(cpu) => cpu.render(out, prefix, is_last),
            Component::Memory(memory) => memory.render(out, prefix, is_last),
            Component::Disk(disk) => disk.render(out, prefix, is_last),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseComponentError {
    #[error("empty component string")]
    Empty,
    #[error("unknown component kind: {0}")]
    UnknownKind(String),
    #[error("invalid cpu shape (expected cpu:<cores>@<mhz>): {0}")]
    BadCpu(String),
    #[error("invalid memory shape (expected memory:<mib>): {0}")]
    BadMemory(String),
    #[error("invalid disk shape (expected disk:<ssd|hdd>:<gib>[:<size>=<name>,...]): {0}")]
    BadDisk(String),
    #[error(transparent)]
    Storage(#[from] ParseStorageTypeError),
    #[error("invalid number: {0}")]
    BadNumber(String),
}

impl FromStr for Component {
    type Err = ParseComponentError;

    /// Parses the compact component form documented at module level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.is_empty() {
            return Err(ParseComponentError::Empty);
        }

        let (kind, rest) = trimmed.split_once(':').unwrap_or((trimmed, ""));
        match kind.to_ascii_lowercase().as_str() {
            "cpu" => parse_cpu(rest),
            "memory" | "mem" => parse_memory(rest),
            "disk" => parse_disk(rest),
            other => Err(ParseComponentError::UnknownKind(other.to_string())),
        }
    }
}

fn parse_cpu(rest: &str) -> Result<Component, ParseComponentError> {
    let Some((cores_str, mhz_str)) = rest.split_once('@') else {
        return Err(ParseComponentError::BadCpu(rest.to_string()));
    };

    let cores: u32 = parse_num(cores_str)?;
    let clock_mhz: u32 = parse_num(mhz_str)?;
    Ok(Component::Cpu(Cpu::new(cores, clock_mhz)))
}

fn parse_memory(rest: &str) -> Result<Component, ParseComponentError> {
    if rest.is_empty() {
        return Err(ParseComponentError::BadMemory(rest.to_string()));
    }

    let size_mib: u64 = parse_num(rest)?;
    Ok(Component::Memory(Memory::new(size_mib)))
}

fn parse_disk(rest: &str) -> Result<Component, ParseComponentError> {
    let mut parts = rest.splitn(3, ':');
    let (Some(type_str), Some(gib_str)) = (parts.next(), parts.next()) else {
        return Err(ParseComponentError::BadDisk(rest.to_string()));
    };

    let storage: StorageType = type_str.parse()?;
    let capacity_gib: u64 = parse_num(gib_str)?;
    let mut disk: Disk = Disk::new(storage, capacity_gib);

    if let Some(partition_list) = parts.next() {
        for entry in partition_list.split(',').filter(|entry| !entry.is_empty()) {
            let Some((size_str, name)) = entry.split_once('=') else {
                return Err(ParseComponentError::BadDisk(entry.to_string()));
            };
            disk = disk.add_partition(parse_num(size_str)?, name);
        }
    }

    Ok(Component::Disk(disk))
}

fn parse_num<N: FromStr>(s: &str) -> Result<N, ParseComponentError> {
    let trimmed: &str = s.trim();
    trimmed
        .parse::<N>()
        .map_err(|_| ParseComponentError::BadNumber(trimmed.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
