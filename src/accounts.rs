//! Account lookups against the host user database (NSS)

use declarative::{Account, AccountLookup};
use std::io;

/// Reads accounts through the system's passwd lookup
pub struct SystemAccounts;

#[cfg(unix)]
impl AccountLookup for SystemAccounts {
    fn lookup(&self, name: &str) -> io::Result<Option<Account>> {
        use nix::errno::Errno;
        use nix::unistd::User;

        if name.contains('\0') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("user name contains a NUL byte: {:?}", name),
            ));
        }

        match User::from_name(name) {
            Ok(Some(user)) => Ok(Some(Account {
                name: user.name,
                uid: user.uid.as_raw(),
                home: user.dir.to_string_lossy().into_owned(),
            })),
            Ok(None) => Ok(None),
            // Some NSS backends report "no such user" as an error instead of
            // an empty result
            Err(Errno::ENOENT | Errno::ESRCH) => Ok(None),
            Err(errno) => Err(io::Error::from(errno)),
        }
    }
}

#[cfg(not(unix))]
impl AccountLookup for SystemAccounts {
    fn lookup(&self, _name: &str) -> io::Result<Option<Account>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "account lookup not supported on this platform",
        ))
    }
}
