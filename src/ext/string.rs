/// Extension trait deriving package identifiers from free-form names.
pub trait StringExt {
    /// Lowercase, hyphen separated form of the string.
    ///
    /// Every run of characters outside `[A-Za-z0-9-]` becomes a single
    /// hyphen, repeated hyphens collapse and leading/trailing hyphens are
    /// trimmed.
    ///
    /// # Examples
    /// ```
    /// use configure_skeleton::ext::StringExt;
    ///
    /// assert_eq!("My Laravel Package!".slugify(), "my-laravel-package");
    /// ```
    fn slugify(&self) -> String;

    /// PascalCase form: words separated by `-`, `_` or spaces get their first
    /// letter uppercased and are joined together. The rest of each word is
    /// left untouched, so an already PascalCase string is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use configure_skeleton::ext::StringExt;
    ///
    /// assert_eq!("my-package".title_case(), "MyPackage");
    /// assert_eq!("MyPackage".title_case(), "MyPackage");
    /// ```
    fn title_case(&self) -> String;

    /// Vendor namespace: like [`StringExt::title_case`] but only spaces and
    /// hyphens separate words.
    fn namespace_case(&self) -> String;

    /// The string with its first character lowercased.
    fn lcfirst(&self) -> String;
}

impl StringExt for str {
    fn slugify(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut prev_dash = false;

        for ch in self.chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_lowercase());
                prev_dash = false;
            } else if !prev_dash && !out.is_empty() {
                out.push('-');
                prev_dash = true;
            }
        }

        while out.ends_with('-') {
            out.pop();
        }

        out
    }

    fn title_case(&self) -> String {
        join_capitalized(self, &['-', '_', ' '])
    }

    fn namespace_case(&self) -> String {
        join_capitalized(self, &['-', ' '])
    }

    fn lcfirst(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

fn join_capitalized(subject: &str, separators: &[char]) -> String {
    subject
        .split(|c: char| separators.contains(&c))
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
