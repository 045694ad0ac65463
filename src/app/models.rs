//! Data models for the manifest inspector
//!
//! This module defines the record shapes that flow from the property list into
//! the asset index: the raw [`AssetRecord`] read from one manifest entry, the
//! per-device [`Asset`] it fans out into, and the [`Field`] wrapper that keeps
//! track of which values the manifest actually supplied.

use std::fmt;

use plist::{Dictionary, Value};

use crate::constants::{display, expected, keys};

/// A manifest value that may have been omitted
///
/// Many real-world manifest entries leave out optional keys. Absent values
/// render as the `None` placeholder in reports, which keeps the output
/// compatible with existing consumers while keeping the distinction typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Value supplied by the manifest
    Present(T),
    /// Key missing from the manifest entry
    #[default]
    Absent,
}

impl<T> Field<T> {
    /// Check whether the manifest supplied this value
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Check whether the manifest omitted this value
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the value, if present
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    /// Transform the contained value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Present(value) => Field::Present(f(value)),
            Field::Absent => Field::Absent,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Present(value) => write!(f, "{}", value),
            Field::Absent => f.write_str(display::ABSENT),
        }
    }
}

/// One manifest entry, before it is fanned out per device
///
/// Values are transient: the loader builds one per entry, derives the
/// [`Asset`] from it and drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRecord {
    pub supported_devices: Field<Vec<String>>,
    pub product: Field<String>,
    pub publisher: Field<String>,
    pub documentation_id: Field<String>,
    pub os_version: Field<String>,
    pub release_type: Field<String>,
    pub prerequisite_os_version: Field<String>,
    pub build: Field<String>,
    pub prerequisite_build: Field<String>,
    pub installation_size: Field<String>,
    pub download_size: Field<String>,
    pub unarchived_size: Field<String>,
    pub compression_algorithm: Field<String>,
    pub base_url: Field<String>,
    pub relative_path: Field<String>,
    pub measurement_algorithm: Field<String>,
    pub measurement: Field<Vec<u8>>,
}

impl AssetRecord {
    /// Read every known key from a manifest entry
    ///
    /// Keys of an unexpected type are treated as absent, except for product
    /// and publisher, which keep any present value so a mismatch is still
    /// caught. Sizes are kept as text whether the manifest stores them as
    /// integers or strings.
    pub fn from_dictionary(entry: &Dictionary) -> Self {
        Self {
            supported_devices: string_list(entry, keys::SUPPORTED_DEVICES),
            product: identity(entry, keys::PRODUCT),
            publisher: identity(entry, keys::PUBLISHER),
            documentation_id: text(entry, keys::DOCUMENTATION_ID),
            os_version: text(entry, keys::OS_VERSION),
            release_type: text(entry, keys::RELEASE_TYPE),
            prerequisite_os_version: text(entry, keys::PREREQUISITE_OS_VERSION),
            build: text(entry, keys::BUILD),
            prerequisite_build: text(entry, keys::PREREQUISITE_BUILD),
            installation_size: text(entry, keys::INSTALLATION_SIZE),
            download_size: text(entry, keys::DOWNLOAD_SIZE),
            unarchived_size: text(entry, keys::UNARCHIVED_SIZE),
            compression_algorithm: text(entry, keys::COMPRESSION_ALGORITHM),
            base_url: text(entry, keys::BASE_URL),
            relative_path: text(entry, keys::RELATIVE_PATH),
            measurement_algorithm: text(entry, keys::MEASUREMENT_ALGORITHM),
            measurement: entry
                .get(keys::MEASUREMENT)
                .and_then(Value::as_data)
                .map(<[u8]>::to_vec)
                .into(),
        }
    }

    /// Whether the release type is exactly `Beta`
    pub fn is_beta(&self) -> bool {
        self.release_type.as_option().map(String::as_str) == Some(expected::BETA_RELEASE)
    }

    /// Version string used as the index key
    ///
    /// Beta entries with a documentation ID get it appended in parentheses, so
    /// a beta and a release of the same OS version stay distinct keys.
    pub fn index_version(&self) -> String {
        let version = self.os_version.to_string();
        match (&self.os_version, self.is_beta(), &self.documentation_id) {
            (Field::Present(_), true, Field::Present(doc_id)) => format!("{}({})", version, doc_id),
            _ => version,
        }
    }

    /// Base URL and relative path concatenated verbatim
    pub fn download_url(&self) -> String {
        format!("{}{}", self.base_url, self.relative_path)
    }

    /// Measurement as lowercase hex
    pub fn measurement_hex(&self) -> Field<String> {
        self.measurement.clone().map(hex::encode)
    }

    /// Build the flattened asset shared by every device of this entry
    pub fn to_asset(&self) -> Asset {
        Asset {
            version: self.index_version(),
            is_beta: self.is_beta(),
            os_version: self.os_version.clone(),
            documentation_id: self.documentation_id.clone(),
            release_type: self.release_type.clone(),
            prerequisite_version: self.prerequisite_os_version.clone(),
            build: self.build.clone(),
            prerequisite_build: self.prerequisite_build.clone(),
            install_size: self.installation_size.clone(),
            download_size: self.download_size.clone(),
            unarchived_size: self.unarchived_size.clone(),
            file_format: self.compression_algorithm.clone(),
            url: self.download_url(),
            hash_algorithm: self.measurement_algorithm.clone(),
            hash: self.measurement_hex(),
        }
    }
}

/// One device-specific, version-specific update offering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Index key: the OS version, with a `(docID)` suffix for betas
    pub version: String,
    pub is_beta: bool,
    /// OS version exactly as the manifest states it
    pub os_version: Field<String>,
    pub documentation_id: Field<String>,
    pub release_type: Field<String>,
    pub prerequisite_version: Field<String>,
    pub build: Field<String>,
    pub prerequisite_build: Field<String>,
    pub install_size: Field<String>,
    pub download_size: Field<String>,
    pub unarchived_size: Field<String>,
    pub file_format: Field<String>,
    /// Download URL; may contain the absent placeholder if a part was missing
    pub url: String,
    pub hash_algorithm: Field<String>,
    /// Measurement rendered as lowercase hex
    pub hash: Field<String>,
}

fn text(entry: &Dictionary, key: &str) -> Field<String> {
    entry.get(key).and_then(scalar_text).into()
}

/// Any present value as text; containers and blobs use their debug form
fn identity(entry: &Dictionary, key: &str) -> Field<String> {
    entry
        .get(key)
        .map(|value| scalar_text(value).unwrap_or_else(|| format!("{:?}", value)))
        .into()
}

fn string_list(entry: &Dictionary, key: &str) -> Field<Vec<String>> {
    entry
        .get(key)
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(scalar_text).collect())
        .into()
}

/// Render a scalar plist value as text; containers and blobs have no text form
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => i
            .as_unsigned()
            .map(|u| u.to_string())
            .or_else(|| i.as_signed().map(|s| s.to_string())),
        Value::Real(r) => Some(r.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, Value)]) -> Dictionary {
        let mut dict = Dictionary::new();
        for (key, value) in pairs {
            dict.insert(key.to_string(), value.clone());
        }
        dict
    }

    #[test]
    fn test_field_display() {
        let present: Field<String> = Field::Present("11D201".to_string());
        let absent: Field<String> = Field::Absent;
        assert_eq!(present.to_string(), "11D201");
        assert_eq!(absent.to_string(), "None");
        assert!(present.is_present());
        assert!(absent.is_absent());
        assert_eq!(Field::from(Some(3)).as_option(), Some(&3));
    }

    #[test]
    fn test_record_reads_known_keys() {
        let dict = entry(&[
            (keys::OS_VERSION, Value::String("7.1.1".into())),
            (keys::BUILD, Value::String("11D201".into())),
            (keys::DOWNLOAD_SIZE, Value::Integer(1_234_567u64.into())),
            (
                keys::SUPPORTED_DEVICES,
                Value::Array(vec![
                    Value::String("iPhone6,1".into()),
                    Value::String("iPhone6,2".into()),
                ]),
            ),
            (keys::MEASUREMENT, Value::Data(vec![0xde, 0xad, 0xbe, 0xef])),
        ]);

        let record = AssetRecord::from_dictionary(&dict);
        assert_eq!(record.os_version, Field::Present("7.1.1".to_string()));
        assert_eq!(record.download_size, Field::Present("1234567".to_string()));
        assert_eq!(
            record.supported_devices,
            Field::Present(vec!["iPhone6,1".to_string(), "iPhone6,2".to_string()])
        );
        assert_eq!(record.measurement_hex(), Field::Present("deadbeef".to_string()));
        assert!(record.prerequisite_build.is_absent());
    }

    #[test]
    fn test_identity_keeps_non_string_values() {
        let dict = entry(&[
            (
                keys::PUBLISHER,
                Value::Array(vec![Value::String("Not Apple".into())]),
            ),
            (keys::PRODUCT, Value::Data(vec![1, 2])),
            (keys::OS_VERSION, Value::Array(vec![])),
        ]);

        let record = AssetRecord::from_dictionary(&dict);
        let publisher = record.publisher.as_option().unwrap();
        assert!(publisher.contains("Not Apple"));
        assert_ne!(publisher, "Not Apple");
        assert!(record.product.is_present());
        assert!(record.os_version.is_absent());
    }

    #[test]
    fn test_beta_version_key() {
        let mut record = AssetRecord {
            os_version: Field::Present("7.1.2".to_string()),
            release_type: Field::Present("Beta".to_string()),
            documentation_id: Field::Present("X".to_string()),
            ..Default::default()
        };
        assert!(record.is_beta());
        assert_eq!(record.index_version(), "7.1.2(X)");

        record.documentation_id = Field::Absent;
        assert_eq!(record.index_version(), "7.1.2");

        record.release_type = Field::Present("Internal".to_string());
        record.documentation_id = Field::Present("X".to_string());
        assert!(!record.is_beta());
        assert_eq!(record.index_version(), "7.1.2");
    }

    #[test]
    fn test_download_url_keeps_placeholder() {
        let record = AssetRecord {
            base_url: Field::Present("http://appldnld.apple.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(record.download_url(), "http://appldnld.apple.com/None");
        assert_eq!(record.to_asset().hash.to_string(), "None");
        assert_eq!(record.to_asset().version, "None");
    }
}
