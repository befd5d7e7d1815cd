use std::env::current_dir;
use std::io;
use std::path::{absolute, Component, Path, PathBuf};

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if let Ok(stripped) = p.strip_prefix("~") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(stripped);
        }
    }
    p.to_path_buf()
}

/// resolves `.` and `..` against the current directory without touching the filesystem
pub fn canonicalize<P: AsRef<Path>>(relative_path: P) -> io::Result<PathBuf> {
    let relative_path = relative_path.as_ref();
    if relative_path.has_root() {
        return Ok(relative_path.to_path_buf());
    }

    let mut abs_path = current_dir()?;
    for component in relative_path.components() {
        match component {
            Component::ParentDir => {
                abs_path.pop();
            }
            Component::CurDir => continue,
            Component::Normal(c) => abs_path.push(c),
            Component::RootDir | Component::Prefix(_) => abs_path.push(component.as_os_str()),
        };
    }

    Ok(abs_path)
}

pub fn get_absolute_path<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    absolute(canonicalize(expand_tilde(path))?)
}
