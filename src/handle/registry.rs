// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process-wide set of live handle addresses.
//!
//! Every handle returned by `new_engine` is registered here and removed by
//! `delete_engine`. The ABI functions check membership before dereferencing,
//! which turns null pointers, foreign pointers, double deletes and most
//! use-after-delete calls into logged sentinels. The allocator may hand a
//! freed address to a later handle, so a stale pointer can still alias a new
//! engine: handle validity remains the caller's responsibility.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

static LIVE_HANDLES: Mutex<BTreeSet<usize>> = Mutex::new(BTreeSet::new());

fn live() -> MutexGuard<'static, BTreeSet<usize>> {
    LIVE_HANDLES.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Register `address`, returning the number of live handles afterwards.
pub fn register(address: usize) -> usize {
    let mut set = live();
    set.insert(address);
    set.len()
}

/// Remove `address`. Returns `false` if it was not registered.
pub fn unregister(address: usize) -> bool {
    live().remove(&address)
}

pub fn is_live(address: usize) -> bool {
    live().contains(&address)
}

pub fn live_count() -> usize {
    live().len()
}
