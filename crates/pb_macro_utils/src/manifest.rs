use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locates the [`syn::Path`] of a workspace crate as seen from the crate
/// that invokes the proc-macro.
///
/// # Example
///
/// ```no_run
/// # use pb_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("pb_reflect"));
/// ```
///
/// Reading the manifest is not cheap, callers should resolve each path once
/// per macro invocation.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the name begins with `pb_` and the caller depends on the facade crate
///    `polybind`, return `::polybind::short_name` (`pb_reflect` -> `::polybind::reflect`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to `::crate_name`.
///
/// A crate that expands its own derive inside its tests needs
/// `extern crate self as pb_reflect;` at the root so that rule 4 resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "polybind";
const CRATE_PREFIX: &str = "pb_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{short}")));
        }
        None
    }

    /// Returns the path of the package named `name`, resolved from the
    /// caller's `Cargo.toml`. See the type level docs for the order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }
        Self::parse_path(&format!("::{name}"))
    }

    /// Runs `func` with the cached [`Manifest`] of the caller's `Cargo.toml`.
    ///
    /// The cache is keyed by manifest path and invalidated when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}
