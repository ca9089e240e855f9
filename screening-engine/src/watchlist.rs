//! Watchlist model and loaders
//!
//! The engine screens against whatever watchlist it is handed at
//! construction: the built-in seed list, caller-supplied entries, or
//! rows loaded from a CSV export.

use crate::error::{Error, Result};
use crate::types::WatchlistEntry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Read-only watchlist, fixed for the lifetime of the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    /// Build from caller-supplied entries
    pub fn from_entries(entries: Vec<WatchlistEntry>) -> Self {
        Self { entries }
    }

    /// Load from a CSV export with header
    /// `name,aliases,address,country,dob,source_list,category`.
    /// Aliases are `;`-separated; an empty dob cell means none.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut entries = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            entries.push(record?.into_entry()?);
        }
        info!(
            "Loaded {} watchlist entries from {}",
            entries.len(),
            path.as_ref().display()
        );
        Ok(Self { entries })
    }

    /// Built-in demonstration watchlist
    pub fn seed() -> Self {
        Self {
            entries: vec![
                WatchlistEntry {
                    name: "Mohammad Al Hamed".to_string(),
                    aliases: vec![
                        "Mohammed Al-Hameed".to_string(),
                        "Mohamad Alhammad".to_string(),
                    ],
                    address: "12 King Faisal Road, Manama, Bahrain".to_string(),
                    country: "BH".to_string(),
                    dob: Some("1978-04-09".to_string()),
                    source_list: "UN Sanctions".to_string(),
                    category: "Terrorism".to_string(),
                },
                WatchlistEntry {
                    name: "Zhang Wei".to_string(),
                    aliases: vec!["Wei Chang".to_string(), "Z. Wei".to_string()],
                    address: "66 Nanjing West Road, Jing'an, Shanghai, China".to_string(),
                    country: "CN".to_string(),
                    dob: Some("1983-11-23".to_string()),
                    source_list: "OFAC SDN".to_string(),
                    category: "Proliferation".to_string(),
                },
                WatchlistEntry {
                    name: "Hafiz Mohammed".to_string(),
                    aliases: vec!["Karachi".to_string(), "Pakistan".to_string()],
                    address: "Karachi, Pakistan".to_string(),
                    country: "PK".to_string(),
                    dob: Some("1990-02-01".to_string()),
                    source_list: "EU Consolidated".to_string(),
                    category: "Corruption".to_string(),
                },
                WatchlistEntry {
                    name: "Global Trade LLC".to_string(),
                    aliases: vec![
                        "Global Trading Limited".to_string(),
                        "Global Trade Co.".to_string(),
                    ],
                    address: "PO Box 12345, Dubai, United Arab Emirates".to_string(),
                    country: "AE".to_string(),
                    dob: None,
                    source_list: "Internal Watch".to_string(),
                    category: "Adverse Media".to_string(),
                },
            ],
        }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        Self::seed()
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    aliases: String,
    address: String,
    country: String,
    #[serde(default)]
    dob: String,
    source_list: String,
    category: String,
}

impl CsvRow {
    fn into_entry(self) -> Result<WatchlistEntry> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "watchlist row with empty name".to_string(),
            ));
        }

        let aliases = self
            .aliases
            .split(';')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        let dob = match self.dob.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        Ok(WatchlistEntry {
            name: self.name,
            aliases,
            address: self.address,
            country: self.country,
            dob,
            source_list: self.source_list,
            category: self.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_entries() {
        let watchlist = Watchlist::seed();
        assert_eq!(watchlist.len(), 4);
        assert_eq!(watchlist.entries()[0].name, "Mohammad Al Hamed");
        assert!(watchlist.entries()[3].dob.is_none());
    }

    #[test]
    fn test_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,aliases,address,country,dob,source_list,category").unwrap();
        writeln!(
            file,
            "Acme Exports,Acme Ltd; Acme Trading,Pier 4 Harbour City,SG,,Internal Watch,Adverse Media"
        )
        .unwrap();
        writeln!(
            file,
            "Ivan Petrov,,Nevsky 11 St Petersburg,RU,1969-05-17,EU Consolidated,Fraud"
        )
        .unwrap();

        let watchlist = Watchlist::from_csv_path(file.path()).unwrap();
        assert_eq!(watchlist.len(), 2);

        let acme = &watchlist.entries()[0];
        assert_eq!(acme.aliases, vec!["Acme Ltd", "Acme Trading"]);
        assert!(acme.dob.is_none());

        let petrov = &watchlist.entries()[1];
        assert!(petrov.aliases.is_empty());
        assert_eq!(petrov.dob.as_deref(), Some("1969-05-17"));
    }

    #[test]
    fn test_from_csv_rejects_blank_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,aliases,address,country,dob,source_list,category").unwrap();
        writeln!(file, "  ,,Nowhere 1,DE,,List,Category").unwrap();

        assert!(Watchlist::from_csv_path(file.path()).is_err());
    }

    #[test]
    fn test_from_csv_missing_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,address").unwrap();
        writeln!(file, "Acme Exports,Pier 4").unwrap();

        assert!(Watchlist::from_csv_path(file.path()).is_err());
    }
}
