use std::path::{Component, Path};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Joins the normal components of the path with `/`, whatever separator the
    /// host platform uses. `.` components are dropped.
    ///
    /// Stub paths are written with `/`, so this is the form they are compared
    /// against.
    ///
    /// # Examples
    /// ```
    /// use configure_skeleton::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("./src/Facades/Skeleton.php");
    /// assert_eq!(path.to_slash_string(), "src/Facades/Skeleton.php");
    /// ```
    fn to_slash_string(&self) -> String;
}

impl PathExt for Path {
    fn to_slash_string(&self) -> String {
        self.components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
