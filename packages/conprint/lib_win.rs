// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use std::ffi::CStr;
use std::os::raw::c_char;

use windows::Win32::Globalization::lstrlenA;
use windows::Win32::System::Console::{GetStdHandle, STD_OUTPUT_HANDLE, WriteConsoleA};
use windows::core::PCSTR;

/// Write a zero-terminated byte string to the process's standard output
/// console. Best effort: null input, a missing console, and any write
/// failure are all silent no-ops.
///
/// `message` must either be null or point to bytes that stay valid and
/// unchanged, with a terminating zero inside the caller's allocation,
/// for the duration of the call. The bytes are forwarded verbatim; the
/// console's active code page decides how they render.
#[unsafe(no_mangle)]
pub extern "C" fn print(message: *const c_char) {
    // SAFETY: GetStdHandle takes no pointers. The returned standard handle
    // is process-wide and owned by the OS; it is borrowed here, never closed.
    let Ok(stdout) = (unsafe { GetStdHandle(STD_OUTPUT_HANDLE) }) else {
        return;
    };
    // is_invalid covers both the null handle (no console attached) and
    // INVALID_HANDLE_VALUE
    if stdout.is_invalid() || message.is_null() {
        return;
    }
    // SAFETY: message is non-null and the caller guarantees a terminating
    // zero within its allocation; lstrlenA scans up to that terminator.
    let len = unsafe { lstrlenA(PCSTR(message.cast())) };
    // SAFETY: per the caller contract, len bytes starting at message are
    // valid for reads and unchanged for the duration of the call.
    let bytes = unsafe { std::slice::from_raw_parts(message.cast::<u8>(), len as usize) };
    let mut written = 0u32;
    // SAFETY: stdout is a live console handle and written outlives the call.
    // The reported count and any failure are discarded by contract.
    let _ = unsafe { WriteConsoleA(stdout, bytes, Some(&mut written), None) };
}

/// Safe convenience over [`print`] for Rust callers that already hold a
/// zero-terminated string.
#[inline(always)]
pub fn print_cstr(message: &CStr) {
    print(message.as_ptr());
}

#[cfg(test)]
mod test {
    use super::*;
    use std::ptr;

    #[test]
    fn null_message_is_a_silent_noop() {
        print(ptr::null());
    }

    #[test]
    fn empty_message_completes_without_fault() {
        let empty = CStr::from_bytes_with_nul(b"\0").unwrap();
        print(empty.as_ptr());
    }

    #[test]
    fn repeated_calls_are_independent() {
        let msg = CStr::from_bytes_with_nul(b"x\0").unwrap();
        for _ in 0..1000 {
            print(msg.as_ptr());
        }
    }

    #[test]
    fn wrapper_forwards_terminated_bytes() {
        print_cstr(c"hello from conprint\n");
    }

    #[test]
    fn long_message_completes_without_fault() {
        let mut bytes = vec![b'y'; 64 * 1024];
        bytes.push(0);
        let msg = CStr::from_bytes_with_nul(&bytes).unwrap();
        print(msg.as_ptr());
    }
}
