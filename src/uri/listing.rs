use std::fs;
use std::io;
use std::path::Path;

/// Directory access consumed by the resolver.
///
/// An `Err` from [`list`](DirectoryLister::list) means `path` is not a
/// readable directory; the resolver never propagates it.
pub trait DirectoryLister {
    /// Names of the entries in the directory at `path`, in any order.
    fn list(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` names a single data file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Lists regular files through `std::fs`, following symbolic links.
/// Sub-directories and dangling links are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let is_file = fs::metadata(entry.path()).map_or(false, |meta| meta.is_file());
            if is_file {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> DirectoryLister for F
where
    F: Fn(&Path) -> io::Result<Vec<String>>,
{
    fn list(&self, path: &Path) -> io::Result<Vec<String>> {
        self(path)
    }

    // A bare listing function knows nothing about files.
    fn is_file(&self, _path: &Path) -> bool {
        false
    }
}

/// Strip the extension from an entry name: `a.csv` becomes `a`.
pub fn layer_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Sublayer candidates of the directory at `path`: entry stems, sorted.
pub fn candidates<L: DirectoryLister + ?Sized>(lister: &L, path: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = lister.list(path)?.iter().map(|name| layer_stem(name)).collect();
    names.sort();
    Ok(names)
}
