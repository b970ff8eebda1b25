use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::status_info::Status;
use crate::commands::Command;
use crate::config::Config;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub const REPOSITORY_DIR: &str = ".gitlet";
pub const INFO_DIR: &str = "info";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>, config: Config) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
        }
        let path = path.canonicalize()?;

        let gitlet_path = path.join(REPOSITORY_DIR);
        let index = Index::new(gitlet_path.join(INFO_DIR).into_boxed_path());
        let database = Database::new(gitlet_path.into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            config,
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> &Path {
        self.database.path()
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    pub fn head_commit(&self, index: &Index) -> anyhow::Result<Commit> {
        self.database.load_commit(index.head())
    }

    /// Run one command as a single transaction against the index
    ///
    /// The index is loaded, the command validated and then executed, and the
    /// index persisted only if the command succeeded and changed it.
    pub async fn run(&self, command: &dyn Command) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        if command.requires_repository() {
            index.rehydrate()?;
        }

        command.validate(self, &index)?;
        command.execute(self, &mut index)?;

        if index.is_changed() {
            index.write_updates()?;
        }
        self.writer().flush()?;

        debug!(command = command.name(), "command completed");

        Ok(())
    }
}
