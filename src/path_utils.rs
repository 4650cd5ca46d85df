use std::path::{Component, Path};

/// Render a path with `/` separators regardless of platform.
///
/// `.` components are dropped, so `./spec/a_spec.rb` renders as `spec/a_spec.rb`.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        let part = match component {
            Component::CurDir => continue,
            Component::RootDir => {
                out.push('/');
                continue;
            }
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy(),
            Component::ParentDir => "..".into(),
            Component::Normal(name) => name.to_string_lossy(),
        };
        if !out.is_empty() && !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(&part);
    }
    if out.is_empty() {
        out.push('.');
    }
    out
}

/// `path` relative to `root` with `/` separators, or `None` when it is not under `root`.
#[must_use]
pub fn relative_slash(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(to_slash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn joins_components_with_slash() {
        let path: PathBuf = ["spec", "models", "article_spec.rb"].iter().collect();
        assert_eq!(to_slash(&path), "spec/models/article_spec.rb");
    }

    #[test]
    fn drops_current_dir() {
        assert_eq!(to_slash(Path::new("./spec/a_spec.rb")), "spec/a_spec.rb");
        assert_eq!(to_slash(Path::new(".")), ".");
    }

    #[test]
    fn keeps_absolute_root() {
        assert_eq!(to_slash(Path::new("/tmp/spec")), "/tmp/spec");
    }

    #[test]
    fn relative_to_root() {
        assert_eq!(
            relative_slash(Path::new("spec/models/a_spec.rb"), Path::new("spec")),
            Some("models/a_spec.rb".to_string())
        );
        assert_eq!(
            relative_slash(Path::new("app/a.rb"), Path::new("spec")),
            None
        );
    }
}
