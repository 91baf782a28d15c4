//! Platform-specific memory reservation.
//!
//! The allocator talks to the operating system exactly once per region, to
//! obtain a zero-filled block of page-granular memory. This module hides
//! that syscall surface behind [`PlatformMemory`] so the rest of the crate
//! never sees platform types.

use std::ptr::NonNull;

/// Low level memory operations of the host platform.
pub(crate) trait PlatformMemory {
    /// Requests a readable, writable, zero-filled memory block of `len`
    /// bytes. Returns `None` if the underlying call fails.
    unsafe fn request_memory(len: usize) -> Option<NonNull<u8>>;

    /// Returns the block of `len` bytes starting at `addr` to the
    /// operating system.
    unsafe fn return_memory(addr: *mut u8, len: usize);

    /// Virtual memory page size of the machine in bytes.
    fn page_size() -> usize;
}

/// The host platform. Zero-sized; the `cfg` modules below supply the
/// matching [`PlatformMemory`] implementation at compile time.
pub(crate) struct Platform;

/// Wrapper to use [`Platform::request_memory`].
#[inline]
pub(crate) unsafe fn request_memory(len: usize) -> Option<NonNull<u8>> {
    unsafe { Platform::request_memory(len) }
}

/// Wrapper to use [`Platform::return_memory`].
#[inline]
pub(crate) unsafe fn return_memory(addr: *mut u8, len: usize) {
    unsafe { Platform::return_memory(addr, len) }
}

/// Wrapper to use [`Platform::page_size`].
#[inline]
pub(crate) fn page_size() -> usize {
    Platform::page_size()
}

#[cfg(unix)]
mod unix {
    use super::{Platform, PlatformMemory};

    use libc::{mmap, munmap, off_t, size_t};

    use std::os::raw::{c_int, c_void};
    use std::ptr::NonNull;

    impl PlatformMemory for Platform {
        unsafe fn request_memory(len: usize) -> Option<NonNull<u8>> {
            const ADDR: *mut c_void = std::ptr::null_mut::<c_void>();
            // Read-write, private, not backed by a file. Anonymous
            // mappings are handed out zero-filled.
            const PROT: c_int = libc::PROT_READ | libc::PROT_WRITE;
            const FLAGS: c_int = libc::MAP_PRIVATE | libc::MAP_ANONYMOUS;
            const FD: c_int = -1;
            const OFFSET: off_t = 0;

            unsafe {
                match mmap(ADDR, len as size_t, PROT, FLAGS, FD, OFFSET) {
                    libc::MAP_FAILED => None,
                    addr => Some(NonNull::new_unchecked(addr).cast::<u8>()),
                }
            }
        }

        unsafe fn return_memory(addr: *mut u8, len: usize) {
            unsafe {
                munmap(addr as *mut c_void, len as size_t);
            }
        }

        fn page_size() -> usize {
            unsafe { libc::sysconf(libc::_SC_PAGE_SIZE) as usize }
        }
    }
}

#[cfg(windows)]
mod windows {
    use super::{Platform, PlatformMemory};

    use windows::Win32::System::{Memory, SystemInformation};

    use std::mem::MaybeUninit;
    use std::os::raw::c_void;
    use std::ptr::NonNull;

    impl PlatformMemory for Platform {
        unsafe fn request_memory(len: usize) -> Option<NonNull<u8>> {
            let protection = Memory::PAGE_READWRITE;

            // Reserve and commit in one step; committed pages read as
            // zero until first written.
            let flags = Memory::MEM_RESERVE | Memory::MEM_COMMIT;

            unsafe {
                let addr = Memory::VirtualAlloc(None, len, flags, protection);

                NonNull::new(addr.cast())
            }
        }

        unsafe fn return_memory(addr: *mut u8, _len: usize) {
            unsafe {
                let _ = Memory::VirtualFree(addr as *mut c_void, 0, Memory::MEM_RELEASE);
            }
        }

        fn page_size() -> usize {
            unsafe {
                let mut system_info = MaybeUninit::uninit();
                SystemInformation::GetSystemInfo(system_info.as_mut_ptr());

                system_info.assume_init().dwPageSize as usize
            }
        }
    }
}
