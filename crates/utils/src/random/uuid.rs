//! RFC 4122 UUID generation for versions 1 through 6.
//!
//! Name-based (3, 5) and random (4) identifiers come straight from the
//! `uuid` crate. The time-based layouts (1, 2, 6) are packed here from a
//! Gregorian timestamp, a 14-bit clock sequence and a 48-bit node.
//!
//! Timestamps count 100 ns intervals since 1582-10-15 00:00:00 UTC. Nodes
//! are random with the multicast bit set, so they never collide with a real
//! IEEE 802 address.

use ::uuid::Uuid;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use utilkit_core::{Error, Result};

/// 100 ns ticks between the Gregorian reform and the Unix epoch.
const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;

const CLOCK_SEQ_MASK: u16 = 0x3FFF;
const RFC4122_VARIANT: u8 = 0x80;
const MULTICAST_BIT: u8 = 0x01;

/// DCE security domain stored in a version 2 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DceDomain {
    Person = 0,
    Group = 1,
    Org = 2,
}

/// Current time as Gregorian 100 ns ticks.
pub fn gregorian_ticks() -> Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::runtime(format!("system clock is before the Unix epoch: {e}")))?;
    let ticks = since_epoch.as_nanos() / 100;
    u64::try_from(ticks)
        .ok()
        .and_then(|t| t.checked_add(GREGORIAN_OFFSET))
        .ok_or_else(|| Error::runtime("system clock is beyond the UUID timestamp range"))
}

fn random_clock_seq() -> u16 {
    rand::thread_rng().gen::<u16>() & CLOCK_SEQ_MASK
}

fn random_node() -> [u8; 6] {
    let mut node: [u8; 6] = rand::thread_rng().gen();
    node[0] |= MULTICAST_BIT;
    node
}

fn set_clock_seq_and_node(bytes: &mut [u8; 16], clock_seq: u16, node: [u8; 6]) {
    let [hi, lo] = (clock_seq & CLOCK_SEQ_MASK).to_be_bytes();
    bytes[8] = hi | RFC4122_VARIANT;
    bytes[9] = lo;
    bytes[10..].copy_from_slice(&node);
}

fn gregorian_layout(ticks: u64, version: u8, clock_seq: u16, node: [u8; 6]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[0..4].copy_from_slice(&(ticks as u32).to_be_bytes());
    bytes[4..6].copy_from_slice(&((ticks >> 32) as u16).to_be_bytes());
    let time_hi = ((ticks >> 48) as u16 & 0x0FFF) | (u16::from(version) << 12);
    bytes[6..8].copy_from_slice(&time_hi.to_be_bytes());
    set_clock_seq_and_node(&mut bytes, clock_seq, node);
    bytes
}

/// Time-based UUID for the current time.
pub fn v1() -> Result<Uuid> {
    Ok(v1_at(gregorian_ticks()?, random_clock_seq(), random_node()))
}

/// Version 1 UUID from explicit fields. Only the low 60 bits of `ticks` and
/// the low 14 bits of `clock_seq` are used.
#[must_use]
pub fn v1_at(ticks: u64, clock_seq: u16, node: [u8; 6]) -> Uuid {
    Uuid::from_bytes(gregorian_layout(ticks, 1, clock_seq, node))
}

/// DCE security UUID carrying a local identifier such as a uid or gid.
pub fn v2(domain: DceDomain, local_id: u32) -> Result<Uuid> {
    Ok(v2_at(
        domain,
        local_id,
        gregorian_ticks()?,
        random_clock_seq(),
        random_node(),
    ))
}

/// Version 2 UUID from explicit fields.
///
/// `time_low` is replaced by `local_id` and `clock_seq_low` by the domain,
/// leaving 6 bits of clock sequence.
#[must_use]
pub fn v2_at(domain: DceDomain, local_id: u32, ticks: u64, clock_seq: u16, node: [u8; 6]) -> Uuid {
    let mut bytes = gregorian_layout(ticks, 2, clock_seq, node);
    bytes[0..4].copy_from_slice(&local_id.to_be_bytes());
    bytes[9] = domain as u8;
    Uuid::from_bytes(bytes)
}

/// Name-based UUID using MD5.
#[must_use]
pub fn v3(namespace: &Uuid, name: &str) -> Uuid {
    Uuid::new_v3(namespace, name.as_bytes())
}

/// Random UUID.
#[must_use]
pub fn v4() -> Uuid {
    Uuid::new_v4()
}

/// Name-based UUID using SHA-1.
#[must_use]
pub fn v5(namespace: &Uuid, name: &str) -> Uuid {
    Uuid::new_v5(namespace, name.as_bytes())
}

/// Time-ordered UUID for the current time.
pub fn v6() -> Result<Uuid> {
    Ok(v6_at(gregorian_ticks()?, random_clock_seq(), random_node()))
}

/// Version 6 UUID from explicit fields: the version 1 timestamp reordered
/// most significant bits first so the text form sorts by time.
#[must_use]
pub fn v6_at(ticks: u64, clock_seq: u16, node: [u8; 6]) -> Uuid {
    let mut bytes = [0u8; 16];
    bytes[0..4].copy_from_slice(&((ticks >> 28) as u32).to_be_bytes());
    bytes[4..6].copy_from_slice(&((ticks >> 12) as u16).to_be_bytes());
    let time_low = (ticks as u16 & 0x0FFF) | 0x6000;
    bytes[6..8].copy_from_slice(&time_low.to_be_bytes());
    set_clock_seq_and_node(&mut bytes, clock_seq, node);
    Uuid::from_bytes(bytes)
}
