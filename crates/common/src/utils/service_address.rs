//! Address of the running instance, reported back to callers for diagnostics.
//!
//! Format is `<hostname>/<ip>:<port>`. Lookups never fail; unknown parts are
//! replaced by placeholder text.

use std::net::IpAddr;

use tracing::warn;

const UNKNOWN_HOST: &str = "unknown host name";
const UNKNOWN_IP: &str = "unknown IP address";

/// Resolve the address string for an instance listening on `port`.
pub fn service_address(port: u16) -> String {
    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .map_err(|e| warn!(error = %e, "failed to read host name"))
        .ok();
    let ip = local_ip_address::local_ip()
        .map_err(|e| warn!(error = %e, "failed to detect local IP address"))
        .ok();
    format_address(host.as_deref(), ip, port)
}

fn format_address(host: Option<&str>, ip: Option<IpAddr>, port: u16) -> String {
    let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(UNKNOWN_HOST);
    let ip = ip.map(|ip| ip.to_string()).unwrap_or_else(|| UNKNOWN_IP.to_string());
    format!("{host}/{ip}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_has_host_ip_and_port() {
        let ip: IpAddr = "10.0.0.7".parse().unwrap();
        assert_eq!(format_address(Some("web-1"), Some(ip), 7000), "web-1/10.0.0.7:7000");
    }

    #[test]
    fn missing_parts_use_placeholders() {
        assert_eq!(format_address(None, None, 80), "unknown host name/unknown IP address:80");
        let ip: IpAddr = "192.168.1.4".parse().unwrap();
        assert_eq!(format_address(Some("  "), Some(ip), 80), "unknown host name/192.168.1.4:80");
        assert_eq!(format_address(Some("db"), None, 80), "db/unknown IP address:80");
    }

    #[test]
    fn host_name_comes_from_the_system() {
        let addr = service_address(7123);
        assert!(addr.ends_with(":7123"), "got {addr}");
        assert!(!addr.starts_with(UNKNOWN_HOST), "got {addr}");
    }
}
