//! CLI argument parsing using clap.
//!
//! Every option is a boolean flag; none takes a value. Repeating a flag
//! sets it again.

use clap::{ArgAction, Parser};

const EXAMPLES: &str = "\
REPORT FORMAT:
    One line per interface/address combination, with up to 4 fields:
       1. interface name
       2. IP address (CIDR for unicast addresses)
       3. unicast or multicast
       4. MAC address, or NOMAC if the interface has none

EXAMPLES:
    # Report all IP addresses
    $ nifs

    # Report only IPv4, unicast addresses
    $ nifs -4 -u

    # Report only HW, IPv4, unicast addresses
    $ nifs -4 -u -H

    # Report interface names and addresses only
    $ nifs --no-cast --no-mac";

/// List the network interfaces with their IP addresses.
///
/// Generates a very simple report of the IP addresses associated with the
/// network interfaces. Flags within a pair (-4/-6, -u/-m, -H/-s) restrict
/// the report to that side; giving neither or both reports both.
#[derive(Debug, Parser)]
#[command(name = "nifs")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
#[command(args_override_self = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Report only IPv4 addresses
    #[arg(short = '4', long = "ipv4")]
    pub ipv4: bool,

    /// Report only IPv6 addresses
    #[arg(short = '6', long = "ipv6")]
    pub ipv6: bool,

    /// Report only unicast addresses
    #[arg(short, long)]
    pub unicast: bool,

    /// Report only multicast addresses
    #[arg(short, long)]
    pub multicast: bool,

    /// Report only hardware interfaces (have a MAC address)
    #[arg(short = 'H', long = "hw")]
    pub hw: bool,

    /// Report only software interfaces (no MAC address)
    #[arg(short, long = "sw")]
    pub sw: bool,

    /// Print the MAC address column (default)
    #[arg(short = 'M', long = "mac", overrides_with = "no_mac")]
    pub mac: bool,

    /// Omit the MAC address column
    #[arg(long = "no-mac", overrides_with = "mac")]
    pub no_mac: bool,

    /// Omit the unicast/multicast column
    #[arg(short = 'C', long = "no-cast")]
    pub no_cast: bool,

    /// Log diagnostics to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown options, and the help or version
    /// "error" when those were requested.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Same as [`Cli::try_parse_args`].
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if the MAC column should be printed.
    #[must_use]
    pub const fn show_mac(&self) -> bool {
        !self.no_mac
    }
}
