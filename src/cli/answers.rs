use crate::{
    constants::{questions, STDIN_INDICATOR},
    error::Result,
    ext::StringExt,
    identity::{Identity, IdentityResolver},
    ioutils::{parse_answers, read_from},
    package::PackageDescriptor,
    prompt::{PromptProvider, TextPromptConfig},
};
use serde_json::{Map, Value};

/// Asks the identity and package questions in order, each default computed
/// from the answers given so far.
pub struct AnswerCollector<'a> {
    prompter: &'a dyn PromptProvider,
    resolver: &'a IdentityResolver<'a>,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn PromptProvider, resolver: &'a IdentityResolver<'a>) -> Self {
        Self { prompter, resolver }
    }

    fn ask(&self, key: &'static str, prompt: &str, default: String) -> Result<String> {
        self.prompter.prompt_text(&TextPromptConfig { key, prompt: prompt.to_string(), default })
    }

    /// Collects every answer. `folder_name` is the default package name.
    pub fn collect(&self, folder_name: &str) -> Result<(Identity, PackageDescriptor)> {
        let author_name =
            self.ask(questions::AUTHOR_NAME, "Author name", self.resolver.user_name())?;
        let author_username = self.ask(
            questions::AUTHOR_USERNAME,
            "Author username",
            self.resolver.guess_username(),
        )?;

        let vendor = self.resolver.guess_vendor(&author_name, &author_username);
        let vendor_name = self.ask(questions::VENDOR_NAME, "Vendor name", vendor.name)?;
        let vendor_username_default =
            if vendor.username.is_empty() { vendor_name.slugify() } else { vendor.username };
        let vendor_username =
            self.ask(questions::VENDOR_USERNAME, "Vendor username", vendor_username_default)?;
        let vendor_namespace = self.ask(
            questions::VENDOR_NAMESPACE,
            "Vendor namespace",
            vendor_name.namespace_case(),
        )?;

        let package_name =
            self.ask(questions::PACKAGE_NAME, "Package name", folder_name.to_string())?;
        let class_name = self.ask(
            questions::CLASS_NAME,
            "Class name",
            PackageDescriptor::default_class_name(&package_name),
        )?;
        let description = self.ask(
            questions::PACKAGE_DESCRIPTION,
            "Package description",
            PackageDescriptor::default_description(&package_name.slugify()),
        )?;

        let identity = Identity::new(
            author_name,
            author_username,
            vendor_name,
            vendor_username,
            vendor_namespace,
        );
        let package = PackageDescriptor::new(package_name, class_name, description);
        Ok((identity, package))
    }
}

/// Reads the `--answers` argument: inline JSON, or JSON on stdin for `-`.
pub fn load_answers(answers_arg: &str) -> Result<Map<String, Value>> {
    let buf = if answers_arg == STDIN_INDICATOR {
        read_from(std::io::stdin())?
    } else {
        answers_arg.to_string()
    };
    parse_answers(&buf)
}

/// The block shown before the operator confirms the changes.
pub fn summary(identity: &Identity, package: &PackageDescriptor) -> String {
    [
        "----------------------".to_string(),
        format!("Author     : {} ({})", identity.author_username, identity.author_name),
        format!("Vendor     : {} ({})", identity.vendor_slug, identity.vendor_name),
        format!("Package    : {} <{}>", package.slug, package.description),
        format!("Namespace  : {}\\{}", identity.vendor_namespace, package.class_name),
        format!("Class name : {}", package.class_name),
        "----------------------".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AuthStatus, CommitAuthor, Organization, OrganizationApi, VersionControl};
    use crate::prompt::{AnswersPrompter, LinePrompter};
    use serde_json::json;
    use std::io::{Cursor, Sink};

    #[derive(Default)]
    struct FakeRepo {
        user_name: Option<String>,
        remote_url: Option<String>,
        authors: Vec<CommitAuthor>,
    }

    impl VersionControl for FakeRepo {
        fn user_name(&self) -> Option<String> {
            self.user_name.clone()
        }

        fn remote_url(&self) -> Option<String> {
            self.remote_url.clone()
        }

        fn author_log(&self) -> Vec<CommitAuthor> {
            self.authors.clone()
        }
    }

    struct NoAuth;

    impl AuthStatus for NoAuth {
        fn status_output(&self) -> Option<String> {
            None
        }
    }

    struct AcmeOrg;

    impl OrganizationApi for AcmeOrg {
        fn organization(&self, login: &str) -> Option<Organization> {
            (login == "acme").then(|| Organization {
                name: Some("Acme Corp".into()),
                login: Some("acme".into()),
            })
        }
    }

    fn jane_repo() -> FakeRepo {
        FakeRepo {
            user_name: Some("Jane Doe".into()),
            remote_url: Some("git@github.com:acme/laravel-widget.git".into()),
            authors: vec![CommitAuthor::new("Jane Doe", "4242+janedoe@users.noreply.github.com")],
        }
    }

    #[test]
    fn empty_answers_take_guessed_defaults() {
        let repo = jane_repo();
        let resolver = IdentityResolver::new(&repo, Some(&NoAuth), Some(&AcmeOrg));
        let prompter: LinePrompter<Cursor<&str>, Sink> =
            LinePrompter::new(Cursor::new(""), std::io::sink());

        let (identity, package) =
            AnswerCollector::new(&prompter, &resolver).collect("laravel-widget").unwrap();

        assert_eq!(identity.author_name, "Jane Doe");
        assert_eq!(identity.author_username, "janedoe");
        assert_eq!(identity.vendor_name, "Acme Corp");
        assert_eq!(identity.vendor_username, "acme");
        assert_eq!(identity.vendor_slug, "acme");
        assert_eq!(identity.vendor_namespace, "AcmeCorp");
        assert_eq!(package.name, "laravel-widget");
        assert_eq!(package.slug, "laravel-widget");
        assert_eq!(package.class_name, "LaravelWidget");
        assert_eq!(package.variable_name, "laravelWidget");
        assert_eq!(package.description, "This is my package laravel-widget");
    }

    #[test]
    fn later_defaults_follow_earlier_answers() {
        let repo = FakeRepo::default();
        let resolver = IdentityResolver::new(&repo, None, None);
        let input = "Jane Doe\n\nThe Vendor\n\n\nMy Widget\n\n\n";
        let prompter = LinePrompter::new(Cursor::new(input), Vec::new());

        let (identity, package) =
            AnswerCollector::new(&prompter, &resolver).collect("skeleton").unwrap();

        assert_eq!(identity.author_username, "");
        assert_eq!(identity.vendor_name, "The Vendor");
        assert_eq!(identity.vendor_username, "the-vendor");
        assert_eq!(identity.vendor_namespace, "TheVendor");
        assert_eq!(package.slug, "my-widget");
        assert_eq!(package.class_name, "MyWidget");
        assert_eq!(package.description, "This is my package my-widget");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.starts_with("-> Author name: -> Author username: "));
        assert!(output.contains("-> Vendor username (the-vendor): "));
        assert!(output.contains("-> Class name (MyWidget): "));
    }

    #[test]
    fn predefined_answers_override_defaults() {
        let repo = jane_repo();
        let resolver = IdentityResolver::new(&repo, None, None);
        let prompter = AnswersPrompter::new(
            parse_answers(r#"{"vendor_name": "Spatie", "class_name": "Gadget"}"#).unwrap(),
        );

        let (identity, package) =
            AnswerCollector::new(&prompter, &resolver).collect("widget").unwrap();

        assert_eq!(identity.vendor_name, "Spatie");
        assert_eq!(identity.vendor_username, "janedoe");
        assert_eq!(identity.vendor_namespace, "Spatie");
        assert_eq!(package.class_name, "Gadget");
        assert_eq!(package.variable_name, "gadget");
        assert_eq!(package.slug, "widget");
    }

    #[test]
    fn loads_inline_answers() {
        let answers = load_answers(r#"{"package_name": "widget"}"#).unwrap();
        assert_eq!(answers.get("package_name"), Some(&json!("widget")));
        assert!(load_answers("[1, 2]").is_err());
    }

    #[test]
    fn renders_summary() {
        let identity = Identity::new(
            "Jane Doe".into(),
            "janedoe".into(),
            "Acme Corp".into(),
            "acme".into(),
            "AcmeCorp".into(),
        );
        let package = PackageDescriptor::new("widget".into(), "Widget".into(), "Widgets".into());

        assert_eq!(
            summary(&identity, &package),
            "----------------------\n\
             Author     : janedoe (Jane Doe)\n\
             Vendor     : acme (Acme Corp)\n\
             Package    : widget <Widgets>\n\
             Namespace  : AcmeCorp\\Widget\n\
             Class name : Widget\n\
             ----------------------"
        );
    }
}
