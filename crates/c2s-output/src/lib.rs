//! `c2s-output` — SUMO document writers for the cityflow2sumo translator.
//!
//! Three documents are produced, each by a [`SumoDocument`] implementation:
//!
//! | Document                 | Source type           | Default file          |
//! |--------------------------|-----------------------|-----------------------|
//! | network (`<net>`)        | `c2s_network::Network`| `network.net.xml`     |
//! | routes (`<routes>`)      | `c2s_routes::Routes`  | `routes.rou.xml`      |
//! | run configuration        | [`RunConfig`]         | `simulation.sumocfg`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use c2s_output::write_all;
//!
//! std::fs::create_dir_all("./output")?;
//! write_all(Path::new("./output"), &network, &routes, &config)?;
//! ```

pub mod document;
pub mod error;
pub mod xml;


use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use c2s_core::TranslateConfig;
use c2s_network::Network;
use c2s_routes::Routes;

pub use document::{RunConfig, SumoDocument, render};
pub use error::{OutputError, OutputResult};
pub use xml::XmlWriter;

/// Paths of the files written by [`write_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub net:    PathBuf,
    pub routes: PathBuf,
    pub config: PathBuf,
}

/// Write the network, routes, and run configuration into `dir`.
///
/// `dir` must already exist.  File names come from `config`.  Each document
/// is first written to a hidden staging file next to its target; the targets
/// are only replaced once all three staged cleanly, so a failed write leaves
/// no new artifacts behind.
pub fn write_all(
    dir:     &Path,
    network: &Network,
    routes:  &Routes,
    config:  &TranslateConfig,
) -> OutputResult<Artifacts> {
    let artifacts = Artifacts {
        net:    dir.join(&config.net_file),
        routes: dir.join(&config.route_file),
        config: dir.join(&config.config_file),
    };
    let run_config = RunConfig::from(config);

    let documents: [(&Path, &dyn Stage); 3] = [
        (artifacts.net.as_path(), network),
        (artifacts.routes.as_path(), routes),
        (artifacts.config.as_path(), &run_config),
    ];

    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(documents.len());
    for (target, doc) in documents {
        let tmp = staging_path(target);
        if let Err(e) = doc.stage(&tmp) {
            discard(&staged);
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        staged.push((tmp, target));
    }

    for (tmp, target) in &staged {
        fs::rename(tmp, target).map_err(|source| OutputError::Replace {
            path: target.to_path_buf(),
            source,
        })?;
        log::info!("wrote {}", target.display());
    }
    Ok(artifacts)
}

/// Write a single document to `path`, replacing any existing file.
pub fn write_document<D: SumoDocument + ?Sized>(path: &Path, doc: &D) -> OutputResult<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut xml = XmlWriter::new(BufWriter::new(file))?;
    doc.write_xml(&mut xml)?;
    xml.finish()?;
    Ok(())
}

// ── Staging ───────────────────────────────────────────────────────────────────

/// Object-safe bridge over [`SumoDocument`], whose `write_xml` is generic.
trait Stage {
    fn stage(&self, path: &Path) -> OutputResult<()>;
}

impl<D: SumoDocument> Stage for D {
    fn stage(&self, path: &Path) -> OutputResult<()> {
        write_document(path, self)
    }
}

/// `dir/name` → `dir/.name.tmp`.
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.tmp"))
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (tmp, _) in staged {
        if let Err(e) = fs::remove_file(tmp) {
            log::warn!("could not remove {}: {e}", tmp.display());
        }
    }
}
