/*!
Unix-specific platform queries.
*/

use std::ffi::CStr;

/// Operating system name as reported by `uname(2)`
pub fn system_name() -> Option<String> {
    let mut info: libc::utsname = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::uname(&mut info) };
    if result != 0 {
        return None;
    }

    let name = unsafe { CStr::from_ptr(info.sysname.as_ptr()) };
    let name = name.to_string_lossy().trim().to_string();
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_name_is_reported() {
        let name = system_name().expect("uname should succeed");
        assert!(!name.is_empty());
    }
}
