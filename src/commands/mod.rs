pub mod agents;
pub mod completions;
pub mod config;
pub mod disks;
pub mod generate;

use eyre::Result;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::catalog::character::Character;
use crate::catalog::collection;
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::party::filter::FilterSelection;

/// Catalog from `--catalog`, else the config's `catalog`, else built-in
pub fn load_catalog(catalog_path: Option<&PathBuf>, config: &Config) -> Result<Catalog> {
    let path = catalog_path.map(|p| Config::expand_path(p)).or_else(|| config.catalog_path());
    Catalog::resolve(path.as_deref())
}

/// Agent pool and filter for one generation request
pub struct Request {
    pub pool: Vec<Character>,
    pub filter: FilterSelection,
}

impl Request {
    pub fn prepare(catalog: &Catalog, args: &FilterArgs, config: &Config) -> Result<Self> {
        let pool = if args.collection {
            if config.collection.is_empty() {
                eyre::bail!("No agents in your collection. Add a `collection:` list to eridu.yaml or use --owned");
            }
            collection::restrict(catalog, &config.collection)
        } else if !args.owned.is_empty() {
            collection::restrict(catalog, &args.owned)
        } else {
            catalog.characters().to_vec()
        };

        let mut filter = FilterSelection::parse(&args.attributes, &args.specialties)?;
        let strict = config.generator.strict && !args.relaxed;
        if !strict {
            filter = filter.autofilled();
        }

        log::info!(
            "Prepared request: {} agents, strict={}, {}",
            pool.len(),
            strict,
            filter.describe()
        );
        Ok(Self { pool, filter })
    }
}
