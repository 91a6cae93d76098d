//! Tests for the run module.

use std::io;
use std::net::IpAddr;

use super::*;
use nifs::config::Cli;
use nifs::network::{EnumerateError, HardwareAddr, IfNet, Interface};

/// Source with one loopback and one Ethernet interface; `utun0` always fails.
struct FixedSource;

impl FixedSource {
    fn ethernet_mac() -> Option<HardwareAddr> {
        HardwareAddr::new([0x8c, 0x85, 0x90, 0x0a, 0x0b, 0x0c])
    }
}

impl InterfaceSource for FixedSource {
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError> {
        Ok(vec![
            Interface::new(1, "lo0", None),
            Interface::new(7, "utun0", None),
            Interface::new(4, "en0", Self::ethernet_mac()),
        ])
    }

    fn unicast_addrs(&self, interface: &Interface) -> Result<Vec<IfNet>, EnumerateError> {
        let net = |addr: &str, prefix| IfNet::new(addr.parse().unwrap(), prefix);
        match interface.name.as_str() {
            "lo0" => Ok(vec![net("127.0.0.1", 8), net("::1", 128)]),
            "en0" => Ok(vec![net("192.168.1.20", 24), net("fe80::8e85:90ff:fe0a:b0c", 64)]),
            _ => Err(EnumerateError::not_found(&interface.name)),
        }
    }

    fn multicast_addrs(&self, interface: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        match interface.name.as_str() {
            "lo0" => Ok(vec!["224.0.0.1".parse().unwrap()]),
            "en0" => Ok(vec!["ff02::1".parse().unwrap()]),
            _ => Err(EnumerateError::Io {
                context: "/proc/net/igmp".to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }),
        }
    }
}

/// Source with only the loopback IPv4 address.
struct LoopbackOnly;

impl InterfaceSource for LoopbackOnly {
    fn interfaces(&self) -> Result<Vec<Interface>, EnumerateError> {
        Ok(vec![Interface::new(1, "lo0", None)])
    }

    fn unicast_addrs(&self, _: &Interface) -> Result<Vec<IfNet>, EnumerateError> {
        Ok(vec![IfNet::new("127.0.0.1".parse().unwrap(), 8)])
    }

    fn multicast_addrs(&self, _: &Interface) -> Result<Vec<IpAddr>, EnumerateError> {
        Ok(Vec::new())
    }
}

fn run_with<S: InterfaceSource>(args: &[&str], source: &S) -> String {
    let cli = Cli::try_parse_from_iter(std::iter::once("nifs").chain(args.iter().copied())).unwrap();
    let config = ReportConfig::from_cli(&cli);

    let mut out = Vec::new();
    execute(&config, source, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

mod execute_report {
    use super::*;

    #[test]
    fn loopback_record_with_default_flags() {
        assert_eq!(run_with(&[], &LoopbackOnly), "lo0 127.0.0.1/8 unicast NOMAC\n");
    }

    #[test]
    fn default_flags_report_everything_in_order() {
        let output = run_with(&[], &FixedSource);

        assert_eq!(
            output,
            "lo0 127.0.0.1/8 unicast NOMAC\n\
             lo0 ::1/128 unicast NOMAC\n\
             lo0 224.0.0.1 multicast NOMAC\n\
             en0 192.168.1.20/24 unicast 8c:85:90:0a:0b:0c\n\
             en0 fe80::8e85:90ff:fe0a:b0c/64 unicast 8c:85:90:0a:0b:0c\n\
             en0 ff02::1 multicast 8c:85:90:0a:0b:0c\n"
        );
    }

    #[test]
    fn ipv4_unicast_hardware_only() {
        let output = run_with(&["-4", "-u", "-H"], &FixedSource);
        assert_eq!(output, "en0 192.168.1.20/24 unicast 8c:85:90:0a:0b:0c\n");
    }

    #[test]
    fn ipv6_multicast_without_optional_columns() {
        let output = run_with(&["-6", "-m", "--no-cast", "--no-mac"], &FixedSource);
        assert_eq!(output, "en0 ff02::1\n");
    }

    #[test]
    fn software_interfaces_only() {
        let output = run_with(&["--sw", "-C"], &FixedSource);

        assert_eq!(
            output,
            "lo0 127.0.0.1/8 NOMAC\nlo0 ::1/128 NOMAC\nlo0 224.0.0.1 NOMAC\n"
        );
    }

    #[test]
    fn returns_line_count() {
        let config = ReportConfig::default();
        let mut out = Vec::new();

        let count = execute(&config, &FixedSource, &mut out).unwrap();

        assert_eq!(count, 6);
    }
}

mod run_error {
    use super::*;

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_broken_pipe() {
        let config = ReportConfig::default();

        let error = execute(&config, &LoopbackOnly, &mut ClosedPipe).unwrap_err();

        assert!(error.is_broken_pipe());
    }

    #[test]
    fn displays_report_error() {
        let error = RunError::from(ReportError::from(io::Error::other("disk full")));
        assert_eq!(error.to_string(), "Failed to write report: disk full");
    }
}
