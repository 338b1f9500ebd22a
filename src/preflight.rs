use crate::error::{ProvisionError, ProvisionResult};

/// Decides whether the process may mutate system state.
pub trait PrivilegeCheck {
    fn is_privileged(&self) -> bool;
}

/// Root check on the effective user id of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectiveUser;

impl EffectiveUser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PrivilegeCheck for EffectiveUser {
    fn is_privileged(&self) -> bool {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
}

/// Abort unless running with administrative rights.
pub fn check_privilege(check: &dyn PrivilegeCheck) -> ProvisionResult<()> {
    if check.is_privileged() {
        Ok(())
    } else {
        Err(ProvisionError::NotPrivileged)
    }
}
