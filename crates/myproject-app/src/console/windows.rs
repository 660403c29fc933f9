//! Win32 console attachment.
use std::{fs::OpenOptions, os::windows::io::IntoRawHandle as _};

use windows_sys::Win32::{
    Foundation::{ERROR_ACCESS_DENIED, GetLastError},
    System::Console::{
        ATTACH_PARENT_PROCESS, AllocConsole, AttachConsole, STD_ERROR_HANDLE, STD_OUTPUT_HANDLE,
        SetStdHandle,
    },
};

use super::{ConsoleError, ConsoleOutcome};

pub(super) fn attach_or_create() -> Result<ConsoleOutcome, ConsoleError> {
    let outcome = attach_or_allocate()?;
    if outcome.redirects_std_streams() {
        redirect_std_streams()?;
    }
    Ok(outcome)
}

fn attach_or_allocate() -> Result<ConsoleOutcome, ConsoleError> {
    // SAFETY: plain Win32 call without pointer arguments.
    if unsafe { AttachConsole(ATTACH_PARENT_PROCESS) } != 0 {
        return Ok(ConsoleOutcome::Attached);
    }

    // Console-subsystem processes already own a console; attaching reports
    // access denied and there is nothing left to do.
    // SAFETY: reads the calling thread's last-error value.
    if unsafe { GetLastError() } == ERROR_ACCESS_DENIED {
        return Ok(ConsoleOutcome::AlreadyAttached);
    }

    // SAFETY: plain Win32 call without arguments.
    if unsafe { AllocConsole() } == 0 {
        // SAFETY: reads the calling thread's last-error value.
        let code = unsafe { GetLastError() };
        return Err(ConsoleError::Allocate { code });
    }
    Ok(ConsoleOutcome::Created)
}

/// Points stdout and stderr at `CONOUT$`.
///
/// The opened handles are owned by the standard-handle table from here on and
/// stay open until the process exits.
fn redirect_std_streams() -> Result<(), ConsoleError> {
    for std_handle in [STD_OUTPUT_HANDLE, STD_ERROR_HANDLE] {
        let conout = OpenOptions::new()
            .read(true)
            .write(true)
            .open("CONOUT$")
            .map_err(|source| ConsoleError::OpenConsoleOutput { source })?;
        let handle = conout.into_raw_handle();
        // SAFETY: `handle` is a valid console handle whose ownership was
        // released by `into_raw_handle`.
        if unsafe { SetStdHandle(std_handle, handle) } == 0 {
            // SAFETY: reads the calling thread's last-error value.
            let code = unsafe { GetLastError() };
            return Err(ConsoleError::Redirect { code });
        }
    }
    Ok(())
}
