use crate::{
    cli::{Args, SkipConfirm},
    error::Result,
    workspace::WorkingTree,
};

/// Snapshot of everything a run depends on besides the operator's answers.
#[derive(Debug, Clone)]
pub struct Environment {
    tree: WorkingTree,
    excludes: Vec<String>,
    skip_confirms: Vec<SkipConfirm>,
    dry_run: bool,
    install: bool,
    delete_script: bool,
}

impl Environment {
    pub fn new(tree: WorkingTree) -> Self {
        Self {
            tree,
            excludes: Vec::new(),
            skip_confirms: Vec::new(),
            dry_run: false,
            install: true,
            delete_script: true,
        }
    }

    /// Builds the environment from command line arguments. Without `--script`
    /// the current executable is the script.
    pub fn from_args(args: &Args) -> Result<Self> {
        let script = args.script.clone().or_else(|| std::env::current_exe().ok());
        let tree = WorkingTree::open(&args.path, script)?;
        Ok(Self::new(tree)
            .with_excludes(args.exclude.clone())
            .with_skip_confirms(args.skip_confirms.clone())
            .with_dry_run(args.dry_run)
            .with_install(!args.no_install)
            .with_delete_script(!args.keep_script))
    }

    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn with_skip_confirms(mut self, skip_confirms: Vec<SkipConfirm>) -> Self {
        self.skip_confirms = skip_confirms;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_install(mut self, install: bool) -> Self {
        self.install = install;
        self
    }

    pub fn with_delete_script(mut self, delete_script: bool) -> Self {
        self.delete_script = delete_script;
        self
    }

    pub fn tree(&self) -> &WorkingTree {
        &self.tree
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether `composer install` may be offered at all.
    pub fn install(&self) -> bool {
        self.install
    }

    /// Whether deleting the script may be offered at all.
    pub fn delete_script(&self) -> bool {
        self.delete_script
    }

    pub fn should_skip(&self, confirm: SkipConfirm) -> bool {
        self.skip_confirms.contains(&SkipConfirm::All) || self.skip_confirms.contains(&confirm)
    }
}
