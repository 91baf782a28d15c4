//! Error types for region setup and allocation.

/// Errors that can occur while reserving the backing region.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// A region of zero bytes was requested.
    #[error("cannot reserve a zero-sized region")]
    ZeroSize,

    /// The operating system refused the memory reservation.
    #[error("memory reservation of {requested} bytes was refused by the operating system")]
    ReservationFailed { requested: usize },
}

/// Errors that can occur during allocation.
///
/// Running out of free segments is recoverable: the allocator state is
/// untouched and the caller may release payloads and retry.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// No free segment is large enough to hold the request.
    #[error("out of memory: no free segment can hold a {requested} byte payload")]
    OutOfMemory { requested: usize },
}
