//! Export mutual exclusion
//!
//! One export runs at a time: a second request while one is in flight is
//! rejected outright, never queued or interleaved. The guard is a flag, not a
//! queue; dropping the ticket releases it, including on the error path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::error::{ReportError, ReportResult};

/// Single-flight flag for export operations
#[derive(Debug, Default)]
pub struct ExportGuard {
    in_flight: AtomicBool,
}

impl ExportGuard {
    /// Create a guard with no export in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide guard shared by every export entry point
    pub fn shared() -> &'static ExportGuard {
        static SHARED: OnceLock<ExportGuard> = OnceLock::new();
        SHARED.get_or_init(ExportGuard::new)
    }

    /// Begin an export, or reject if one is already running
    pub fn begin(&self) -> ReportResult<ExportTicket<'_>> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(ReportError::ExportInProgress);
        }
        Ok(ExportTicket { guard: self })
    }

    /// Whether an export is currently in flight
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Proof that an export slot is held; releases the slot on drop
#[derive(Debug)]
pub struct ExportTicket<'a> {
    guard: &'a ExportGuard,
}

impl Drop for ExportTicket<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}
