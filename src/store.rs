//! Immutable datum → parameter mapping.
//!
//! A `ParameterStore` is built once — from the compiled-in table or from the
//! JSON parameter format — and passed by reference into every conversion.
//! Nothing mutates it afterwards, so sharing it across threads needs no
//! locking.
//!
//! The compiled-in values are the published GOST 32453 seven-parameter sets
//! relating each frame to ПЗ-90.11, adopted unchanged for ГСК-2011 (the two
//! frames agree at the centimeter level). See
//! <https://docs.cntd.ru/document/1200139568> for the standard.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::datum::Datum;
use crate::params::HelmertParams;
use crate::transform::ConvertError;

/// Read-only map from datum to its seven parameters relative to the hub.
///
/// The hub frame itself never has an entry: it is the identity reference
/// and is never looked up by name.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    entries: HashMap<Datum, HelmertParams>,
}

impl ParameterStore {
    /// Store with the compiled-in parameter sets for every supported
    /// non-hub datum.
    pub fn builtin() -> ParameterStore {
        ParameterStore::from_entries(BUILTIN)
    }

    /// Build a store from explicit (datum, parameters) pairs.
    ///
    /// Later duplicates win. Panics if an entry is supplied for the hub.
    pub fn from_entries<I>(entries: I) -> ParameterStore
    where
        I: IntoIterator<Item = (Datum, HelmertParams)>,
    {
        let entries: HashMap<Datum, HelmertParams> = entries.into_iter().collect();
        assert!(
            !entries.contains_key(&Datum::Gsk2011),
            "the hub frame takes no parameter entry"
        );
        ParameterStore { entries }
    }

    /// Parse the JSON parameter format: one object per datum name, each
    /// with the seven numeric fields `wx, wy, wz, dX, dY, dZ, m`.
    ///
    /// Unrecognized datum names and an entry for the hub are errors. A
    /// *missing* datum is not: it only fails later, at lookup time.
    pub fn from_json_str(data: &str) -> anyhow::Result<ParameterStore> {
        let raw: HashMap<String, HelmertParams> =
            serde_json::from_str(data).context("parsing parameter JSON")?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (name, params) in raw {
            let datum: Datum = name.parse()?;
            anyhow::ensure!(
                !datum.is_hub(),
                "parameter entry given for the hub frame {datum}"
            );
            entries.insert(datum, params);
        }
        Ok(ParameterStore { entries })
    }

    /// Load the JSON parameter format from a file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<ParameterStore> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading parameter file {}", path.display()))?;
        let store = ParameterStore::from_json_str(&data)?;
        info!(path = %path.display(), datums = store.len(), "loaded parameter store");
        Ok(store)
    }

    /// Parameters relating `datum` to the hub frame.
    ///
    /// Fails for the hub itself and for any datum the store has no entry
    /// for.
    pub fn lookup(&self, datum: Datum) -> Result<&HelmertParams, ConvertError> {
        self.entries
            .get(&datum)
            .ok_or(ConvertError::UnknownDatum(datum))
    }

    /// Number of datums with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the store has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Datums with an entry, in no particular order.
    pub fn datums(&self) -> impl Iterator<Item = Datum> + '_ {
        self.entries.keys().copied()
    }
}

/// GOST 32453 parameter sets, frame → ГСК-2011.
const BUILTIN: [(Datum, HelmertParams); 7] = [
    (
        Datum::Sk42,
        HelmertParams {
            wx_arcsec: -0.0023,
            wy_arcsec: -0.34646,
            wz_arcsec: -0.79421,
            dx_m: 23.557,
            dy_m: -140.844,
            dz_m: -79.778,
            scale_ppm: -0.228,
        },
    ),
    (
        Datum::Sk95,
        HelmertParams {
            wx_arcsec: -0.0023,
            wy_arcsec: 0.00354,
            wz_arcsec: -0.13421,
            dx_m: 24.457,
            dy_m: -130.784,
            dz_m: -81.538,
            scale_ppm: -0.228,
        },
    ),
    (
        Datum::Pz90,
        HelmertParams {
            wx_arcsec: -0.0023,
            wy_arcsec: 0.00354,
            wz_arcsec: -0.13421,
            dx_m: -1.443,
            dy_m: 0.156,
            dz_m: 0.222,
            scale_ppm: -0.228,
        },
    ),
    (
        Datum::Pz9002,
        HelmertParams {
            wx_arcsec: -0.0023,
            wy_arcsec: 0.00354,
            wz_arcsec: -0.00421,
            dx_m: -0.373,
            dy_m: 0.186,
            dz_m: 0.202,
            scale_ppm: -0.008,
        },
    ),
    // ПЗ-90.11 and ГСК-2011 differ only at the centimeter level.
    (
        Datum::Pz9011,
        HelmertParams {
            wx_arcsec: 0.0,
            wy_arcsec: 0.0,
            wz_arcsec: 0.0,
            dx_m: 0.0,
            dy_m: 0.014,
            dz_m: -0.008,
            scale_ppm: 0.0,
        },
    ),
    (
        Datum::Wgs84,
        HelmertParams {
            wx_arcsec: -0.0023,
            wy_arcsec: 0.00354,
            wz_arcsec: -0.00421,
            dx_m: -0.013,
            dy_m: 0.106,
            dz_m: 0.022,
            scale_ppm: -0.008,
        },
    ),
    (
        Datum::Itrf2008,
        HelmertParams {
            wx_arcsec: 0.0,
            wy_arcsec: 0.0,
            wz_arcsec: 0.0,
            dx_m: -0.003,
            dy_m: -0.001,
            dz_m: 0.0,
            scale_ppm: 0.0,
        },
    ),
];
