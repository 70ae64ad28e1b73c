use crate::{
    cli::{
        answers::{load_answers, summary, AnswerCollector},
        context::Environment,
        Args, PromptStyle, SkipConfirm,
    },
    constants::{questions, STDIN_INDICATOR},
    error::{Error, Result},
    finalize::{CommandRunner, Finalizer, SystemRunner},
    identity::{
        gh::GhCli, git::GitRepository, github::GitHubApi, AuthStatus, IdentityResolver,
        OrganizationApi,
    },
    prompt::{
        AnswersPrompter, ConfirmationConfig, DialoguerPrompter, LinePrompter, PromptProvider,
    },
    rewrite::{ReplacementSet, RewriteOperation, RewriteProcessor},
    scanner::PlaceholderScanner,
};

/// What a completed run did.
#[derive(Debug, Default)]
pub struct RunReport {
    pub operations: Vec<RewriteOperation>,
    pub installed: bool,
    pub script_deleted: bool,
}

/// Drives a run from the questions to the final cleanup.
pub struct Runner<'a> {
    env: &'a Environment,
    prompter: &'a dyn PromptProvider,
    resolver: &'a IdentityResolver<'a>,
    commands: &'a dyn CommandRunner,
}

impl<'a> Runner<'a> {
    pub fn new(
        env: &'a Environment,
        prompter: &'a dyn PromptProvider,
        resolver: &'a IdentityResolver<'a>,
        commands: &'a dyn CommandRunner,
    ) -> Self {
        Self { env, prompter, resolver, commands }
    }

    pub fn run(&self) -> Result<RunReport> {
        let tree = self.env.tree();

        let (identity, package) =
            AnswerCollector::new(self.prompter, self.resolver).collect(&tree.folder_name())?;

        println!("{}", summary(&identity, &package));
        println!("This script will update all relevant files in the project.");

        if !self.confirm(SkipConfirm::Modify, questions::MODIFY_FILES, "Modify files?")? {
            return Err(Error::Aborted);
        }

        let files = PlaceholderScanner::new(tree, self.env.excludes())?.scan()?;
        log::debug!("{} file(s) contain placeholders", files.len());

        let replacements = ReplacementSet::new(&identity, &package);
        let processor = RewriteProcessor::new(tree, &replacements, &package, self.env.dry_run());
        let operations = processor.process_all(&files)?;

        let finalizer = Finalizer::new(tree, self.commands, self.env.dry_run());

        let installed = self.env.install()
            && self.confirm(
                SkipConfirm::Install,
                questions::COMPOSER_INSTALL,
                "Execute `composer install` now?",
            )?
            && finalizer.install_dependencies();

        let script_deleted = self.env.delete_script()
            && finalizer.deletable_script().is_some()
            && self.confirm(
                SkipConfirm::Delete,
                questions::DELETE_SCRIPT,
                "Let this script delete itself?",
            )?
            && finalizer.delete_script()?;

        Ok(RunReport { operations, installed, script_deleted })
    }

    fn confirm(&self, skip: SkipConfirm, key: &'static str, prompt: &str) -> Result<bool> {
        if self.env.should_skip(skip) {
            log::debug!("Confirmation '{key}' accepted by --skip-confirms={skip}");
            return Ok(true);
        }
        self.prompter.prompt_confirmation(&ConfirmationConfig {
            key,
            prompt: prompt.to_string(),
            default: true,
        })
    }
}

/// Picks the prompt provider for the given arguments.
///
/// Predefined answers are consulted first. Interactive prompts cover the rest
/// unless `--non-interactive` is set or the answers were read from stdin, in
/// which case the defaults apply.
pub fn build_prompter(args: &Args) -> Result<Box<dyn PromptProvider>> {
    let answers = match &args.answers {
        Some(answers_arg) => load_answers(answers_arg)?,
        None => Default::default(),
    };

    if args.non_interactive || args.answers.as_deref() == Some(STDIN_INDICATOR) {
        return Ok(Box::new(AnswersPrompter::new(answers)));
    }

    let interactive: Box<dyn PromptProvider> = match args.prompt_style {
        PromptStyle::Plain => Box::new(LinePrompter::stdio()),
        PromptStyle::Rich => Box::new(DialoguerPrompter::new()),
    };
    if args.answers.is_none() {
        return Ok(interactive);
    }
    Ok(Box::new(AnswersPrompter::new(answers).with_fallback(interactive)))
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let env = Environment::from_args(&args)?;
    log::debug!("Configuring '{}'", env.tree().root().display());

    let repo = GitRepository::discover(env.tree().root());
    let gh = (!args.offline).then(GhCli::new);
    let api = (!args.offline).then(GitHubApi::new);
    let resolver = IdentityResolver::new(
        &repo,
        gh.as_ref().map(|gh| gh as &dyn AuthStatus),
        api.as_ref().map(|api| api as &dyn OrganizationApi),
    );

    let prompter = build_prompter(&args)?;
    let commands = SystemRunner;

    let report = Runner::new(&env, prompter.as_ref(), &resolver, &commands).run()?;

    if env.dry_run() {
        println!("Dry run finished: {} file(s) would be updated.", report.operations.len());
    } else {
        println!("Package configured: {} file(s) updated.", report.operations.len());
    }
    Ok(())
}
