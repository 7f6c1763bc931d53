use netaddr_application::ports::ServiceDatabase;
use std::ffi::CString;
use std::ptr;
use std::sync::Mutex;

/// `getservbyname` returns a pointer into static storage.
static SERVENT_LOCK: Mutex<()> = Mutex::new(());

/// Service lookups against the system services database.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemServiceDatabase;

impl ServiceDatabase for SystemServiceDatabase {
    fn port_by_name(&self, name: &str) -> Option<u16> {
        let c_name = CString::new(name).ok()?;
        let _guard = SERVENT_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: the entry is read before the lock is released.
        let entry = unsafe { libc::getservbyname(c_name.as_ptr(), ptr::null()).as_ref()? };
        Some(u16::from_be(entry.s_port as u16))
    }
}
