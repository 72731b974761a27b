//! Database flavor descriptor for MySQL and MariaDB
//!
//! DDL syntax differs between server families and versions. Rather than
//! scattering version comparisons across rendering code, a [`Flavor`] value
//! answers capability queries in one place.

use std::fmt;
use std::str::FromStr;

/// Supported server families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    MySql,
    MariaDb,
}

/// A specific server family and version, e.g. MySQL 8.0 or MariaDB 10.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flavor {
    pub vendor: Vendor,
    pub major: u16,
    pub minor: u16,
}

impl Flavor {
    /// A MySQL flavor at the given version
    pub const fn mysql(major: u16, minor: u16) -> Self {
        Flavor {
            vendor: Vendor::MySql,
            major,
            minor,
        }
    }

    /// A MariaDB flavor at the given version
    pub const fn mariadb(major: u16, minor: u16) -> Self {
        Flavor {
            vendor: Vendor::MariaDb,
            major,
            minor,
        }
    }

    pub fn is_mariadb(&self) -> bool {
        self.vendor == Vendor::MariaDb
    }

    /// True if this is MySQL at or above the given version
    pub fn min_mysql(&self, major: u16, minor: u16) -> bool {
        self.vendor == Vendor::MySql && (self.major, self.minor) >= (major, minor)
    }

    /// True if this is MariaDB at or above the given version
    pub fn min_mariadb(&self, major: u16, minor: u16) -> bool {
        self.vendor == Vendor::MariaDb && (self.major, self.minor) >= (major, minor)
    }

    /// Whether the server supports indexes excluded from the optimizer
    /// (MySQL INVISIBLE, MariaDB IGNORED)
    pub fn supports_invisible_indexes(&self) -> bool {
        self.min_mysql(8, 0) || self.min_mariadb(10, 6)
    }

    /// Whether FULLTEXT `WITH PARSER` renders without a version-gate comment.
    /// MariaDB changed this in 11.7 (MDEV-35308); everything else uses the
    /// `/*!50100 ... */` form.
    pub fn supports_plain_with_parser(&self) -> bool {
        self.min_mariadb(11, 7)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vendor = match self.vendor {
            Vendor::MySql => "mysql",
            Vendor::MariaDb => "mariadb",
        };
        write!(f, "{}:{}.{}", vendor, self.major, self.minor)
    }
}

impl FromStr for Flavor {
    type Err = String;

    /// Parses strings of the form `mysql:8.0` or `mariadb:10.6`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (vendor_str, version_str) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid flavor '{}': expected vendor:major.minor", s))?;
        let vendor = match vendor_str.to_lowercase().as_str() {
            "mysql" => Vendor::MySql,
            "mariadb" => Vendor::MariaDb,
            _ => {
                return Err(format!(
                    "Unknown vendor '{}'. Supported vendors: mysql, mariadb.",
                    vendor_str
                ))
            }
        };
        let (major_str, minor_str) = version_str
            .split_once('.')
            .ok_or_else(|| format!("Invalid flavor version '{}': expected major.minor", version_str))?;
        let major = major_str
            .parse::<u16>()
            .map_err(|_| format!("Invalid major version '{}'", major_str))?;
        let minor = minor_str
            .parse::<u16>()
            .map_err(|_| format!("Invalid minor version '{}'", minor_str))?;
        Ok(Flavor {
            vendor,
            major,
            minor,
        })
    }
}
