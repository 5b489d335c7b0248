//! Process privilege detection.

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Prefix for commands that need root, or `None` when already elevated.
pub fn sudo_prefix() -> Option<&'static str> {
    if is_elevated() {
        None
    } else {
        Some("sudo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sudo_prefix_agrees_with_elevation() {
        assert_eq!(sudo_prefix().is_none(), is_elevated());
    }
}
