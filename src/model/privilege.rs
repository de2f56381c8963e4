use nix::unistd::{Uid, geteuid};

/// Whether the current process may read other users' application data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Elevated,
    NotElevated,
}

impl Privilege {
    pub fn is_elevated(self) -> bool {
        matches!(self, Privilege::Elevated)
    }
}

/// Capability check handed to the collector at startup.
pub trait PrivilegeProbe {
    fn check(&self) -> Privilege;
}

/// Elevated means an effective uid of root, which is what `sudo` gives us.
#[derive(Debug, Default, Clone, Copy)]
pub struct EffectiveUid;

impl PrivilegeProbe for EffectiveUid {
    fn check(&self) -> Privilege {
        Privilege::from(geteuid())
    }
}

impl From<Uid> for Privilege {
    fn from(uid: Uid) -> Self {
        if uid.is_root() {
            Privilege::Elevated
        } else {
            Privilege::NotElevated
        }
    }
}

/// Fixed answer, for tests and dry runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrivilege(pub Privilege);

impl PrivilegeProbe for FixedPrivilege {
    fn check(&self) -> Privilege {
        self.0
    }
}
