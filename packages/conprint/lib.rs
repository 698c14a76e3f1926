// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

#[cfg(not(windows))]
compile_error!(
    "conprint is not yet available on non-Windows machines, please add it to target.'cfg(windows)'.dependencies"
);
#[cfg(windows)]
mod lib_win;
#[cfg(windows)]
pub use lib_win::*;
