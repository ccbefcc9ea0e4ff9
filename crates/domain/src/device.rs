//! Device registry — physical or network devices and the entries that own them.
//!
//! The registry is only ever read. It is scanned leniently: devices,
//! entry links and connections that do not have the expected shape are
//! skipped instead of failing the whole document.

use serde_json::Value;

use crate::error::{DocumentKind, MalformedError};

/// Connection kind carrying a hardware (MAC) address.
pub const MAC_CONNECTION: &str = "mac";

/// A `[kind, value]` pair from a device's `connections` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection(pub String, pub String);

impl Connection {
    /// Read a `[kind, value, ...]` array. A non-string value reads as empty.
    fn from_value(value: &Value) -> Option<Self> {
        let pair = value.as_array()?;
        let kind = pair.first()?.as_str()?;
        let value = pair.get(1).and_then(Value::as_str).unwrap_or_default();
        Some(Self(kind.to_string(), value.to_string()))
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.1
    }
}

/// A registered device.
#[derive(Debug, Clone, Default)]
pub struct Device {
    /// Entry ids this device is linked to.
    pub config_entries: Vec<String>,
    pub connections: Vec<Connection>,
}

impl Device {
    fn from_value(value: &Value) -> Option<Self> {
        let device = value.as_object()?;
        let config_entries = device
            .get("config_entries")
            .and_then(Value::as_array)
            .map(|ids| {
                ids.iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let connections = device
            .get("connections")
            .and_then(Value::as_array)
            .map(|conns| conns.iter().filter_map(Connection::from_value).collect())
            .unwrap_or_default();
        Some(Self {
            config_entries,
            connections,
        })
    }

    #[must_use]
    pub fn is_linked_to(&self, entry_id: &str) -> bool {
        self.config_entries.iter().any(|id| id == entry_id)
    }

    /// Value of the first `mac` connection, in document order.
    #[must_use]
    pub fn mac_address(&self) -> Option<&str> {
        self.connections
            .iter()
            .find(|conn| conn.kind() == MAC_CONNECTION)
            .map(Connection::value)
    }
}

/// The `core.device_registry` document, reduced to its devices.
#[derive(Debug, Clone, Default)]
pub struct DevicesDocument {
    devices: Vec<Device>,
}

impl DevicesDocument {
    /// Interpret a parsed JSON value as a device registry.
    ///
    /// A missing `data.devices` list reads as an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedError::NotAnObject`] when `value` is not a JSON
    /// object.
    pub fn from_value(value: &Value) -> Result<Self, MalformedError> {
        if !value.is_object() {
            return Err(MalformedError::NotAnObject {
                document: DocumentKind::Devices,
            });
        }
        let devices = value
            .pointer("/data/devices")
            .and_then(Value::as_array)
            .map(|devices| devices.iter().filter_map(Device::from_value).collect())
            .unwrap_or_default();
        Ok(Self { devices })
    }

    #[must_use]
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }
}

/// Find the hardware address registered for `entry_id`.
///
/// Devices are scanned in document order and the first linked device that
/// carries a `mac` connection wins. A linked device without one does not stop
/// the scan. Returns `None` when `devices` is absent, nothing matches, or the
/// winning address is empty.
#[must_use]
pub fn resolve_address<'d>(
    entry_id: &str,
    devices: Option<&'d DevicesDocument>,
) -> Option<&'d str> {
    devices?
        .devices()
        .iter()
        .filter(|device| device.is_linked_to(entry_id))
        .find_map(Device::mac_address)
        .filter(|mac| !mac.is_empty())
}
